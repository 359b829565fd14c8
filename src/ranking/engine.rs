use crate::config::DisplaySettings;
use crate::models::LeaderEntry;
use crate::progress;
use crate::showcase::{self, Showcase};

/// Orders leaderboard entries by level descending, then XP descending.
/// The sort is stable: entries with equal level and XP keep their input
/// order. The input is left untouched.
pub fn rank(entries: &[LeaderEntry]) -> Vec<LeaderEntry> {
    let mut ordered = entries.to_vec();
    ordered.sort_by(|a, b| b.level.cmp(&a.level).then(b.xp.cmp(&a.xp)));
    ordered
}

/// Podium highlight for the top three places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// `place` is 1-based; places past the podium get no medal.
    pub fn for_place(place: usize) -> Option<Self> {
        match place {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// Display state for one rendered leaderboard row.
#[derive(Debug, Clone)]
pub struct LeaderRow {
    /// 1-based place after ranking.
    pub place: usize,
    pub medal: Option<Medal>,
    /// Fill of the row's experience bar toward the next level.
    pub xp_bar_percent: u8,
    /// Compact achievement strip shown under the username.
    pub strip: Showcase,
    pub entry: LeaderEntry,
}

/// Derives the full leaderboard view from raw entries.
pub struct RankingEngine {
    xp_to_next_level: u64,
    strip_budget: usize,
}

impl RankingEngine {
    pub fn new(xp_to_next_level: u64, strip_budget: usize) -> Self {
        Self {
            xp_to_next_level: xp_to_next_level.max(1),
            strip_budget,
        }
    }

    pub fn from_settings(display: &DisplaySettings) -> Self {
        Self::new(display.xp_to_next_level, display.strip_budget)
    }

    /// Ranks the entries and derives per-row display state. The row bar
    /// measures the XP earned within the current level against the
    /// per-level threshold.
    pub fn standings(&self, entries: &[LeaderEntry]) -> Vec<LeaderRow> {
        rank(entries)
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let place = i + 1;
                let level_xp = entry.xp % self.xp_to_next_level;
                LeaderRow {
                    place,
                    medal: Medal::for_place(place),
                    xp_bar_percent: progress::xp_bar_percent(level_xp, self.xp_to_next_level),
                    strip: showcase::select(&entry.achievements, self.strip_budget),
                    entry,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Achievement;

    fn entry(id: &str, level: u32, xp: u64) -> LeaderEntry {
        LeaderEntry {
            id: id.to_string(),
            username: id.to_string(),
            avatar_url: String::new(),
            level,
            xp,
            achievements: Vec::new(),
        }
    }

    fn ids(entries: &[LeaderEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_rank_level_then_xp_descending() {
        let entries = vec![
            entry("one", 21, 15320),
            entry("two", 21, 15110),
            entry("three", 19, 9900),
        ];
        let ordered = rank(&entries);
        assert_eq!(ids(&ordered), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_rank_reorders_and_keeps_input() {
        let entries = vec![
            entry("low", 3, 100),
            entry("high", 10, 50),
            entry("mid", 3, 900),
        ];
        let ordered = rank(&entries);
        assert_eq!(ids(&ordered), vec!["high", "mid", "low"]);
        // input untouched
        assert_eq!(ids(&entries), vec!["low", "high", "mid"]);
        assert_eq!(ordered.len(), entries.len());
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let entries = vec![
            entry("first", 5, 1000),
            entry("second", 5, 1000),
            entry("third", 5, 1000),
        ];
        assert_eq!(ids(&rank(&entries)), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn test_medals_cover_podium_only() {
        assert_eq!(Medal::for_place(1), Some(Medal::Gold));
        assert_eq!(Medal::for_place(2), Some(Medal::Silver));
        assert_eq!(Medal::for_place(3), Some(Medal::Bronze));
        assert_eq!(Medal::for_place(4), None);
    }

    #[test]
    fn test_standings_row_state() {
        let mut top = entry("top", 21, 15320);
        top.achievements = vec![Achievement {
            id: "a1".to_string(),
            title: String::new(),
            description: String::new(),
            icon_url: None,
            rarity: Default::default(),
            unlocked: true,
            progress: None,
            unlocked_at: None,
        }];
        let entries = vec![entry("second", 19, 9900), top];

        let engine = RankingEngine::new(1000, 8);
        let rows = engine.standings(&entries);

        assert_eq!(rows[0].place, 1);
        assert_eq!(rows[0].entry.id, "top");
        assert_eq!(rows[0].medal, Some(Medal::Gold));
        // 15320 XP with a 1000-per-level threshold: 320 into the level
        assert_eq!(rows[0].xp_bar_percent, 32);
        assert_eq!(rows[0].strip.visible.len(), 1);

        assert_eq!(rows[1].place, 2);
        assert_eq!(rows[1].medal, Some(Medal::Silver));
        assert_eq!(rows[1].xp_bar_percent, 90);
    }
}
