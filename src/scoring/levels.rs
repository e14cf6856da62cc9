/// Fixed credit awarded per participation level.
///
/// The regulation grants the same credit for a given level no matter which
/// sub-activity was performed. This table overrides the per-activity
/// `points_by_level` tables, which remain only as a fallback for level ids
/// not named here.
pub const LEVEL_CREDITS: [(&str, u32); 6] = [
    ("college", 3),
    ("inter_college", 5),
    ("district", 7),
    ("state", 10),
    ("national", 12),
    ("international", 15),
];

/// Credit for a level id, or `None` when the table does not name it.
pub fn level_credit(level_id: &str) -> Option<u32> {
    LEVEL_CREDITS
        .iter()
        .find(|(id, _)| *id == level_id)
        .map(|(_, points)| *points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels() {
        assert_eq!(level_credit("college"), Some(3));
        assert_eq!(level_credit("inter_college"), Some(5));
        assert_eq!(level_credit("district"), Some(7));
        assert_eq!(level_credit("state"), Some(10));
        assert_eq!(level_credit("national"), Some(12));
        assert_eq!(level_credit("international"), Some(15));
    }

    #[test]
    fn test_unknown_level() {
        assert_eq!(level_credit("galactic"), None);
        assert_eq!(level_credit(""), None);
        assert_eq!(level_credit("College"), None); // ids are case-sensitive
    }

    #[test]
    fn test_credits_ascend() {
        let credits: Vec<u32> = LEVEL_CREDITS.iter().map(|(_, p)| *p).collect();
        let mut sorted = credits.clone();
        sorted.sort_unstable();
        assert_eq!(credits, sorted);
    }
}
