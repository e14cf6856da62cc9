use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level domain grouping for activities.
///
/// The shipped dataset defines five: Technical Skills (A), Sports &
/// Cultural (B), Community Outreach (C), Innovation/IPR/Entrepreneurship
/// (D), and Leadership/Management (E).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Short unique code (single letter in the shipped dataset)
    pub id: String,

    /// Display name
    pub name: String,

    /// One-line description for selection UIs
    pub description: String,
}

/// Competitive tier of an activity, from college up to international.
///
/// Tiers are declared in ascending order and carry the base point value
/// shown to students while they fill in a submission form.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParticipationLevel {
    /// Stable identifier (e.g. "college", "inter_college")
    pub id: String,

    /// Display name
    pub name: String,

    /// Base point value awarded at this tier
    pub base_points: u32,

    /// Extra points for winners. Zero everywhere in the shipped dataset;
    /// the field is carried so a future ruleset can enable it without a
    /// schema change.
    #[serde(default)]
    pub winner_bonus: u32,
}

/// A specific named activity type within a category.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SubActivity {
    /// Stable identifier (e.g. "A1", "C_OTHER")
    pub id: String,

    /// Display name
    pub name: String,

    /// Owning category id; must reference a declared `Category`
    pub category_id: String,

    /// Evidence-type labels a submission may attach (e.g. "Certificate")
    #[serde(default)]
    pub evidence_required: Vec<String>,

    /// Per-level point table, keyed by level id. Retained as the scoring
    /// fallback for level ids absent from the fixed credit table; see
    /// `scoring::compute_points`.
    #[serde(default)]
    pub points_by_level: HashMap<String, u32>,

    /// Scored by elapsed-time bucket instead of level when a duration is
    /// supplied (ongoing/service-type activities)
    #[serde(default)]
    pub is_duration_based: bool,

    /// Duration-bucket point table, keyed by bucket id (e.g. "one_week").
    /// Only meaningful when `is_duration_based` is set.
    #[serde(default)]
    pub duration_points: HashMap<String, u32>,

    /// Marks the category's free-text escape hatch; submissions against a
    /// custom entry must supply their own activity name
    #[serde(default)]
    pub is_custom: bool,
}

impl SubActivity {
    /// Check whether an evidence-type label is one of the accepted labels
    /// for this sub-activity. Matching is case-insensitive.
    pub fn allows_evidence(&self, label: &str) -> bool {
        self.evidence_required
            .iter()
            .any(|e| e.eq_ignore_ascii_case(label))
    }
}

/// Graduation requirement for one academic program: the overall point
/// target plus per-category minimums.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProgramRequirement {
    /// Program name as printed on transcripts (e.g. "B.Tech")
    pub program: String,

    /// Total approved points required over the whole program
    pub total_required: u32,

    /// Minimum approved points per category id
    #[serde(default)]
    pub category_minimums: HashMap<String, u32>,
}

/// The complete activity ruleset of one institution: categories,
/// participation levels, sub-activities, and program requirements.
///
/// A catalog is immutable reference data. It is constructed once at
/// startup, either with [`Catalog::builtin`](crate::catalog::Catalog::builtin)
/// for the shipped dataset or
/// [`Catalog::from_yaml`](crate::catalog::Catalog::from_yaml) for an
/// institution-specific document, and passed by reference to the engine
/// and intake functions.
///
/// Example YAML:
/// ```yaml
/// version: 2
/// categories:
///   - { id: "A", name: "Technical Skills", description: "..." }
/// levels:
///   - { id: "college", name: "College", base_points: 3 }
/// sub_activities:
///   - id: "A1"
///     name: "Programming Competition"
///     category_id: "A"
///     evidence_required: ["Certificate"]
///     points_by_level: { college: 3 }
///   - id: "A_OTHER"
///     name: "Other Technical Activity"
///     category_id: "A"
///     is_custom: true
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Dataset revision, bumped whenever the institution edits the ruleset
    pub version: u32,

    pub categories: Vec<Category>,

    pub levels: Vec<ParticipationLevel>,

    pub sub_activities: Vec<SubActivity>,

    /// Program requirements; optional so taxonomy-only documents stay valid
    #[serde(default)]
    pub programs: Vec<ProgramRequirement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_evidence_case_insensitive() {
        let sub = SubActivity {
            id: "A1".to_string(),
            name: "Programming Competition".to_string(),
            category_id: "A".to_string(),
            evidence_required: vec!["Certificate".to_string(), "Report".to_string()],
            points_by_level: HashMap::new(),
            is_duration_based: false,
            duration_points: HashMap::new(),
            is_custom: false,
        };

        assert!(sub.allows_evidence("Certificate"));
        assert!(sub.allows_evidence("certificate"));
        assert!(sub.allows_evidence("REPORT"));
        assert!(!sub.allows_evidence("Photos"));
    }

    #[test]
    fn test_sub_activity_minimal_yaml() {
        let yaml = r#"
id: "B_OTHER"
name: "Other Sports & Cultural Activity"
category_id: "B"
is_custom: true
"#;
        let sub: SubActivity = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(sub.id, "B_OTHER");
        assert!(sub.is_custom);
        assert!(!sub.is_duration_based);
        assert!(sub.evidence_required.is_empty());
        assert!(sub.points_by_level.is_empty());
        assert!(sub.duration_points.is_empty());
    }

    #[test]
    fn test_level_winner_bonus_defaults_to_zero() {
        let yaml = r#"
id: "state"
name: "State"
base_points: 10
"#;
        let level: ParticipationLevel = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(level.base_points, 10);
        assert_eq!(level.winner_bonus, 0);
    }

    #[test]
    fn test_catalog_rejects_unknown_fields() {
        let yaml = r#"
version: 1
categories: []
levels: []
sub_activities: []
max_points: 100
"#;
        let result: Result<Catalog, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
