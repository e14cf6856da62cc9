use std::collections::{HashMap, HashSet};

use super::schema::Catalog;

/// Validate a catalog dataset before it is handed to callers.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if catalog.version == 0 {
        errors.push("catalog.version: must be at least 1".to_string());
    }

    // Validate categories
    if catalog.categories.is_empty() {
        errors.push("catalog.categories: must not be empty".to_string());
    }
    let mut category_ids = HashSet::new();
    for (i, category) in catalog.categories.iter().enumerate() {
        if category.id.is_empty() {
            errors.push(format!("catalog.categories[{}].id: must not be empty", i));
        }
        if !category_ids.insert(category.id.as_str()) {
            errors.push(format!(
                "catalog.categories[{}].id: duplicate '{}'",
                i, category.id
            ));
        }
    }

    // Validate participation levels
    if catalog.levels.is_empty() {
        errors.push("catalog.levels: must not be empty".to_string());
    }
    let mut level_ids = HashSet::new();
    for (i, level) in catalog.levels.iter().enumerate() {
        if level.id.is_empty() {
            errors.push(format!("catalog.levels[{}].id: must not be empty", i));
        }
        if !level_ids.insert(level.id.as_str()) {
            errors.push(format!("catalog.levels[{}].id: duplicate '{}'", i, level.id));
        }
        if i > 0 {
            let prev = &catalog.levels[i - 1];
            if level.base_points <= prev.base_points {
                errors.push(format!(
                    "catalog.levels[{}].base_points: {} does not exceed '{}' ({})",
                    i, level.base_points, prev.id, prev.base_points
                ));
            }
        }
    }

    // Validate sub-activities
    if catalog.sub_activities.is_empty() {
        errors.push("catalog.sub_activities: must not be empty".to_string());
    }
    let mut sub_activity_ids = HashSet::new();
    let mut per_category: HashMap<&str, (usize, usize)> = HashMap::new();
    for (i, sub) in catalog.sub_activities.iter().enumerate() {
        if sub.id.is_empty() {
            errors.push(format!("catalog.sub_activities[{}].id: must not be empty", i));
        }
        if !sub_activity_ids.insert(sub.id.as_str()) {
            errors.push(format!(
                "catalog.sub_activities[{}].id: duplicate '{}'",
                i, sub.id
            ));
        }
        if category_ids.contains(sub.category_id.as_str()) {
            let entry = per_category.entry(sub.category_id.as_str()).or_insert((0, 0));
            entry.0 += 1;
            if sub.is_custom {
                entry.1 += 1;
            }
        } else {
            errors.push(format!(
                "catalog.sub_activities[{}].category_id: unknown category '{}'",
                i, sub.category_id
            ));
        }
        for key in sorted_unknown_keys(&sub.points_by_level, &level_ids) {
            errors.push(format!(
                "catalog.sub_activities[{}].points_by_level: unknown level '{}'",
                i, key
            ));
        }
        if sub.is_duration_based && sub.duration_points.is_empty() {
            errors.push(format!(
                "catalog.sub_activities[{}].duration_points: must not be empty when is_duration_based",
                i
            ));
        }
        if !sub.is_duration_based && !sub.duration_points.is_empty() {
            errors.push(format!(
                "catalog.sub_activities[{}].duration_points: set but is_duration_based is false",
                i
            ));
        }
    }

    // Every category needs at least one entry and exactly one custom escape hatch
    for (i, category) in catalog.categories.iter().enumerate() {
        let (total, custom) = per_category.get(category.id.as_str()).copied().unwrap_or((0, 0));
        if total == 0 {
            errors.push(format!(
                "catalog.categories[{}]: no sub-activities declared for '{}'",
                i, category.id
            ));
        } else if custom != 1 {
            errors.push(format!(
                "catalog.categories[{}]: expected exactly one custom sub-activity for '{}', found {}",
                i, category.id, custom
            ));
        }
    }

    // Validate program requirements
    let mut program_names = HashSet::new();
    for (i, req) in catalog.programs.iter().enumerate() {
        if req.program.is_empty() {
            errors.push(format!("catalog.programs[{}].program: must not be empty", i));
        }
        if !program_names.insert(req.program.as_str()) {
            errors.push(format!(
                "catalog.programs[{}].program: duplicate '{}'",
                i, req.program
            ));
        }
        for key in sorted_unknown_keys(&req.category_minimums, &category_ids) {
            errors.push(format!(
                "catalog.programs[{}].category_minimums: unknown category '{}'",
                i, key
            ));
        }
        let minimum_sum: u32 = req.category_minimums.values().sum();
        if minimum_sum > req.total_required {
            errors.push(format!(
                "catalog.programs[{}].category_minimums: sum {} exceeds total_required {}",
                i, minimum_sum, req.total_required
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Map iteration order is unspecified; sort so error output is stable.
fn sorted_unknown_keys<'a>(
    table: &'a HashMap<String, u32>,
    known: &HashSet<&str>,
) -> Vec<&'a str> {
    let mut unknown: Vec<&str> = table
        .keys()
        .map(String::as_str)
        .filter(|key| !known.contains(key))
        .collect();
    unknown.sort_unstable();
    unknown
}
