use serde::{Deserialize, Serialize};

use crate::models::Achievement;

/// Achievement list ordering selected by the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Rarity descending, ties by title.
    #[default]
    Rarity,
    /// Unlock date descending, never-unlocked last.
    Date,
    /// Title ascending.
    Title,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Rarity => "rarity",
            SortMode::Date => "date",
            SortMode::Title => "title",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rarity" => Some(SortMode::Rarity),
            "date" => Some(SortMode::Date),
            "title" => Some(SortMode::Title),
            _ => None,
        }
    }
}

/// Returns a newly ordered copy; the sort is stable, so equal keys keep
/// their input order.
pub fn sort_achievements(items: &[Achievement], mode: SortMode) -> Vec<Achievement> {
    let mut ordered = items.to_vec();
    match mode {
        SortMode::Rarity => {
            ordered.sort_by(|a, b| b.rarity.cmp(&a.rarity).then_with(|| a.title.cmp(&b.title)))
        }
        SortMode::Date => ordered.sort_by(|a, b| b.unlocked_at.cmp(&a.unlocked_at)),
        SortMode::Title => ordered.sort_by(|a, b| a.title.cmp(&b.title)),
    }
    ordered
}

/// The "only unlocked" viewer toggle as an explicit parameter.
pub fn filter_unlocked(items: &[Achievement], only_unlocked: bool) -> Vec<Achievement> {
    items
        .iter()
        .filter(|a| !only_unlocked || a.unlocked)
        .cloned()
        .collect()
}
