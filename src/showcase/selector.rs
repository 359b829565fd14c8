use crate::models::Achievement;
use crate::progress;

/// A bounded, display-ready slice of an achievement set.
#[derive(Debug, Clone)]
pub struct Showcase {
    /// At most `budget` achievements, unlocked first, backend order kept
    /// within each partition.
    pub visible: Vec<Achievement>,
    /// How many achievements did not fit, rendered as "+N".
    pub overflow: usize,
}

/// Header counts for the showcase card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseSummary {
    pub unlocked: usize,
    pub total: usize,
    pub percent: u8,
}

/// Picks the achievements to show under a display budget. Unlocked ones
/// carry the signal and fill the slots first; locked ones only pad the
/// remainder. Relative input order is preserved in both partitions.
pub fn select(items: &[Achievement], budget: usize) -> Showcase {
    let mut visible: Vec<Achievement> = items
        .iter()
        .filter(|a| a.unlocked)
        .take(budget)
        .cloned()
        .collect();

    if visible.len() < budget {
        let remainder = budget - visible.len();
        visible.extend(
            items
                .iter()
                .filter(|a| !a.unlocked)
                .take(remainder)
                .cloned(),
        );
    }

    let overflow = items.len() - visible.len();
    Showcase { visible, overflow }
}

pub fn summarize(items: &[Achievement]) -> ShowcaseSummary {
    ShowcaseSummary {
        unlocked: items.iter().filter(|a| a.unlocked).count(),
        total: items.len(),
        percent: progress::completion_percent(items),
    }
}
