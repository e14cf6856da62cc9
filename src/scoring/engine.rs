use tracing::warn;

use super::levels::level_credit;
use crate::catalog::SubActivity;

/// Which rule produced a points figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointsBasis {
    /// The sub-activity's duration table matched the supplied bucket.
    Duration { bucket: String },
    /// The fixed level-credit table matched the participation level.
    LevelCredit { level: String },
    /// The sub-activity's own points table matched a level the credit
    /// table does not name.
    ActivityTable { level: String },
    /// No rule matched; the engine scored zero.
    Unscored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsResult {
    pub points: u32,
    pub basis: PointsBasis,
}

impl PointsResult {
    /// True when no scoring rule matched and the zero default was used.
    pub fn is_defaulted(&self) -> bool {
        matches!(self.basis, PointsBasis::Unscored)
    }
}

/// Compute the points a submission earns.
///
/// Rules apply in order; the first match wins:
///
/// 1. For duration-based entries, the duration table keyed by the supplied
///    bucket. A missing or unrecognized bucket falls through to level
///    scoring rather than scoring zero.
/// 2. The fixed [`LEVEL_CREDITS`](super::LEVEL_CREDITS) table.
/// 3. The sub-activity's own `points_by_level` table.
/// 4. Zero, tagged [`PointsBasis::Unscored`].
///
/// Never errors: unknown level ids and absent durations are expected inputs
/// from drafts, and callers that must reject them do so before scoring.
/// `is_winner` is recorded on submissions but earns no extra credit under
/// the current regulations.
pub fn compute_points(
    sub_activity: &SubActivity,
    level_id: &str,
    is_winner: bool,
    duration: Option<&str>,
) -> PointsResult {
    let _ = is_winner;

    if sub_activity.is_duration_based {
        if let Some(bucket) = duration {
            if let Some(&points) = sub_activity.duration_points.get(bucket) {
                return PointsResult {
                    points,
                    basis: PointsBasis::Duration {
                        bucket: bucket.to_string(),
                    },
                };
            }
        }
    }

    if let Some(points) = level_credit(level_id) {
        return PointsResult {
            points,
            basis: PointsBasis::LevelCredit {
                level: level_id.to_string(),
            },
        };
    }

    if let Some(&points) = sub_activity.points_by_level.get(level_id) {
        return PointsResult {
            points,
            basis: PointsBasis::ActivityTable {
                level: level_id.to_string(),
            },
        };
    }

    warn!(
        sub_activity = %sub_activity.id,
        level = level_id,
        "no scoring rule matched, defaulting to zero points"
    );
    PointsResult {
        points: 0,
        basis: PointsBasis::Unscored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::collections::HashMap;

    fn fixture_sub_activity(points_by_level: &[(&str, u32)]) -> SubActivity {
        SubActivity {
            id: "X1".to_string(),
            name: "Fixture Activity".to_string(),
            category_id: "X".to_string(),
            evidence_required: vec![],
            points_by_level: points_by_level
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            is_duration_based: false,
            duration_points: HashMap::new(),
            is_custom: false,
        }
    }

    #[test]
    fn test_level_credit_overrides_activity_table() {
        let catalog = Catalog::builtin();
        let a1 = catalog.lookup_sub_activity("A1").unwrap();

        // A1's own table says state=7, but the credit table says 10.
        let result = compute_points(a1, "state", false, None);
        assert_eq!(result.points, 10);
        assert_eq!(
            result.basis,
            PointsBasis::LevelCredit {
                level: "state".to_string()
            }
        );
    }

    #[test]
    fn test_level_credits_are_flat_across_sub_activities() {
        let catalog = Catalog::builtin();
        let expected = [
            ("college", 3),
            ("inter_college", 5),
            ("district", 7),
            ("state", 10),
            ("national", 12),
            ("international", 15),
        ];
        for sub in &catalog.sub_activities {
            for (level, points) in expected {
                let result = compute_points(sub, level, false, None);
                // C1 is duration-based but the duration is absent here,
                // so every entry lands on the credit table.
                assert_eq!(result.points, points, "{} at {}", sub.id, level);
            }
        }
    }

    #[test]
    fn test_duration_table_wins_over_level() {
        let catalog = Catalog::builtin();
        let c1 = catalog.lookup_sub_activity("C1").unwrap();

        let result = compute_points(c1, "college", false, Some("one_week"));
        assert_eq!(result.points, 6);
        assert_eq!(
            result.basis,
            PointsBasis::Duration {
                bucket: "one_week".to_string()
            }
        );
    }

    #[test]
    fn test_duration_buckets() {
        let catalog = Catalog::builtin();
        let c1 = catalog.lookup_sub_activity("C1").unwrap();

        for (bucket, points) in [
            ("two_days", 3),
            ("one_week", 6),
            ("one_month", 9),
            ("one_semester", 12),
        ] {
            let result = compute_points(c1, "college", false, Some(bucket));
            assert_eq!(result.points, points, "bucket {}", bucket);
        }
    }

    #[test]
    fn test_unknown_duration_falls_through_to_level() {
        let catalog = Catalog::builtin();
        let c1 = catalog.lookup_sub_activity("C1").unwrap();

        let result = compute_points(c1, "college", false, Some("two_years"));
        assert_eq!(result.points, 3);
        assert_eq!(
            result.basis,
            PointsBasis::LevelCredit {
                level: "college".to_string()
            }
        );
    }

    #[test]
    fn test_absent_duration_falls_through_to_level() {
        let catalog = Catalog::builtin();
        let c1 = catalog.lookup_sub_activity("C1").unwrap();

        let result = compute_points(c1, "national", false, None);
        assert_eq!(result.points, 12);
    }

    #[test]
    fn test_duration_ignored_for_non_duration_entries() {
        let catalog = Catalog::builtin();
        let a2 = catalog.lookup_sub_activity("A2").unwrap();

        let result = compute_points(a2, "college", false, Some("one_week"));
        assert_eq!(result.points, 3);
        assert_eq!(
            result.basis,
            PointsBasis::LevelCredit {
                level: "college".to_string()
            }
        );
    }

    #[test]
    fn test_activity_table_covers_levels_the_credit_table_lacks() {
        let sub = fixture_sub_activity(&[("galactic", 4)]);

        let result = compute_points(&sub, "galactic", false, None);
        assert_eq!(result.points, 4);
        assert_eq!(
            result.basis,
            PointsBasis::ActivityTable {
                level: "galactic".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_level_defaults_to_zero() {
        let catalog = Catalog::builtin();
        let b1 = catalog.lookup_sub_activity("B1").unwrap();

        let result = compute_points(b1, "galactic", false, None);
        assert_eq!(result.points, 0);
        assert_eq!(result.basis, PointsBasis::Unscored);
        assert!(result.is_defaulted());
    }

    #[test]
    fn test_winner_flag_has_no_effect() {
        let catalog = Catalog::builtin();
        let a1 = catalog.lookup_sub_activity("A1").unwrap();

        let lost = compute_points(a1, "state", false, None);
        let won = compute_points(a1, "state", true, None);
        assert_eq!(lost, won);
        assert_eq!(won.points, 10);
    }

    #[test]
    fn test_scored_results_are_not_defaulted() {
        let catalog = Catalog::builtin();
        let a1 = catalog.lookup_sub_activity("A1").unwrap();

        let result = compute_points(a1, "college", false, None);
        assert!(!result.is_defaulted());
    }
}
