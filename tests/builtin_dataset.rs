//! Sanity checks of the builtin dataset through the public API.

use map_points::{compute_points, validate_catalog, Catalog, PointsBasis, LEVEL_CREDITS};

#[test]
fn builtin_dataset_validates() {
    assert!(validate_catalog(&Catalog::builtin()).is_ok());
}

#[test]
fn builtin_referential_integrity() {
    let catalog = Catalog::builtin();
    for sub in &catalog.sub_activities {
        let category = catalog
            .lookup_category(&sub.category_id)
            .unwrap_or_else(|_| panic!("{} references missing category {}", sub.id, sub.category_id));
        let listed: Vec<&str> = catalog
            .sub_activities_for_category(&category.id)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert!(listed.contains(&sub.id.as_str()), "{} missing from its category listing", sub.id);
    }
}

#[test]
fn every_category_has_exactly_one_custom_entry() {
    let catalog = Catalog::builtin();
    for category in &catalog.categories {
        let customs: Vec<&str> = catalog
            .sub_activities_for_category(&category.id)
            .iter()
            .filter(|s| s.is_custom)
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(customs.len(), 1, "category {}", category.id);
    }
}

#[test]
fn builtin_levels_mirror_the_credit_table() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.levels.len(), LEVEL_CREDITS.len());
    for (level, (credit_id, credit)) in catalog.levels.iter().zip(LEVEL_CREDITS) {
        assert_eq!(level.id, credit_id);
        assert_eq!(level.base_points, credit);
    }
}

#[test]
fn regulation_examples() {
    let catalog = Catalog::builtin();

    assert_eq!(catalog.lookup_category("A").unwrap().name, "Technical Skills");
    assert!(catalog.lookup_category("Z").is_err());

    // The flat credit table overrides A1's own table at state level.
    let a1 = catalog.lookup_sub_activity("A1").unwrap();
    assert_eq!(compute_points(a1, "state", false, None).points, 10);

    // Community service is priced by duration when one is given.
    let c1 = catalog.lookup_sub_activity("C1").unwrap();
    assert_eq!(compute_points(c1, "college", false, Some("one_week")).points, 6);
    assert_eq!(compute_points(c1, "college", false, Some("one_month")).points, 9);

    // Winning changes nothing.
    assert_eq!(
        compute_points(a1, "international", true, None),
        compute_points(a1, "international", false, None)
    );

    // Unrecognized levels score zero, tagged as such.
    let result = compute_points(a1, "galactic", false, None);
    assert_eq!(result.points, 0);
    assert_eq!(result.basis, PointsBasis::Unscored);
}

#[test]
fn catalog_roundtrips_through_json() {
    let catalog = Catalog::builtin();
    let json = serde_json::to_string(&catalog).unwrap();
    let recovered: Catalog = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, catalog);
}

#[test]
fn builtin_matches_yaml_rendition() {
    // The same dataset expressed as a YAML document loads to identical
    // lookups. Kept small: one category slice is representative.
    let yaml = r#"
version: 1
categories:
  - id: C
    name: Community Outreach
    description: Social service, community development, and outreach programs
levels:
  - id: college
    name: College
    base_points: 3
  - id: inter_college
    name: Different College
    base_points: 5
  - id: district
    name: District
    base_points: 7
  - id: state
    name: State
    base_points: 10
  - id: national
    name: National
    base_points: 12
  - id: international
    name: International
    base_points: 15
sub_activities:
  - id: C1
    name: Community Service
    category_id: C
    evidence_required: [Certificate, Report, Photos]
    points_by_level:
      college: 3
      district: 5
      state: 7
      national: 9
      international: 11
    is_duration_based: true
    duration_points:
      two_days: 3
      one_week: 6
      one_month: 9
      one_semester: 12
  - id: C_OTHER
    name: Other Community Outreach Activity
    category_id: C
    evidence_required: [Certificate, Report, Photos]
    points_by_level:
      college: 3
      district: 5
      state: 7
      national: 9
      international: 11
    is_custom: true
"#;
    let from_yaml = Catalog::from_yaml(yaml).unwrap();
    let builtin = Catalog::builtin();

    let yaml_c1 = from_yaml.lookup_sub_activity("C1").unwrap();
    let builtin_c1 = builtin.lookup_sub_activity("C1").unwrap();
    assert_eq!(yaml_c1, builtin_c1);
}
