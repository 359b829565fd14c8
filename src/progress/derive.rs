use crate::models::Achievement;

/// Share of unlocked achievements, rounded to a whole percent.
/// An empty set counts as 0%.
pub fn completion_percent(items: &[Achievement]) -> u8 {
    let unlocked = items.iter().filter(|a| a.unlocked).count();
    let total = items.len().max(1);
    ((unlocked as f64 / total as f64) * 100.0).round() as u8
}

/// Display progress for a single achievement: unlocked forces 100,
/// otherwise the stored progress clamped to 0..100 (missing counts as 0).
pub fn effective_progress(a: &Achievement) -> u8 {
    if a.unlocked {
        100
    } else {
        a.progress.unwrap_or(0).min(100)
    }
}

/// Experience bar fill, rounded and clamped to 0..100. A zero threshold
/// is treated as 1 to avoid dividing by zero.
pub fn xp_bar_percent(xp: u64, xp_to_next: u64) -> u8 {
    let pct = (xp as f64 / xp_to_next.max(1) as f64) * 100.0;
    pct.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achievement(unlocked: bool, progress: Option<u8>) -> Achievement {
        Achievement {
            id: "a".to_string(),
            title: String::new(),
            description: String::new(),
            icon_url: None,
            rarity: Default::default(),
            unlocked,
            progress,
            unlocked_at: None,
        }
    }

    #[test]
    fn test_completion_percent() {
        let items = vec![
            achievement(true, None),
            achievement(false, Some(60)),
            achievement(false, None),
            achievement(false, None),
        ];
        assert_eq!(completion_percent(&items), 25);
    }

    #[test]
    fn test_completion_percent_empty_is_zero() {
        assert_eq!(completion_percent(&[]), 0);
    }

    #[test]
    fn test_completion_percent_monotonic() {
        let mut items: Vec<Achievement> = (0..5).map(|_| achievement(false, None)).collect();
        let mut previous = completion_percent(&items);
        for i in 0..5 {
            items[i].unlocked = true;
            let current = completion_percent(&items);
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn test_effective_progress_unlocked_is_always_full() {
        assert_eq!(effective_progress(&achievement(true, Some(15))), 100);
        assert_eq!(effective_progress(&achievement(true, None)), 100);
    }

    #[test]
    fn test_effective_progress_clamps_stored_value() {
        assert_eq!(effective_progress(&achievement(false, Some(160))), 100);
        assert_eq!(effective_progress(&achievement(false, Some(60))), 60);
        assert_eq!(effective_progress(&achievement(false, None)), 0);
    }

    #[test]
    fn test_xp_bar_percent() {
        assert_eq!(xp_bar_percent(15320, 20000), 77);
        assert_eq!(xp_bar_percent(0, 1000), 0);
        assert_eq!(xp_bar_percent(2500, 1000), 100);
        assert_eq!(xp_bar_percent(5, 0), 100);
    }
}
