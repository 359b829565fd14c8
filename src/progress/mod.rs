pub mod derive;
pub mod sort;

pub use derive::{completion_percent, effective_progress, xp_bar_percent};
pub use sort::{filter_unlocked, sort_achievements, SortMode};
