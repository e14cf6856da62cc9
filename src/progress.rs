//! Progress against program requirements and aggregate statistics.
//!
//! Both entry points are pure functions over caller-supplied records;
//! filtering, storage, and display stay with the caller.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::Error;
use crate::submission::{Submission, SubmissionStatus};

/// One category row of a [`ProgressReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub category_id: String,
    pub earned: u32,
    /// Program minimum for this category, zero when the program sets none.
    pub minimum: u32,
    pub met: bool,
}

/// A student's standing against their program's point requirements.
///
/// Only approved submissions count; pending and rejected records
/// contribute nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub program: String,
    pub total_earned: u32,
    pub total_required: u32,
    /// Points still needed, zero once the target is met.
    pub remaining: u32,
    /// Rounded to the nearest percent and capped at 100.
    pub percent_complete: u32,
    /// One row per catalog category, in catalog order.
    pub categories: Vec<CategoryProgress>,
}

/// Submission counts per status plus total points awarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Sum of points over approved submissions only.
    pub points_awarded: u32,
}

/// Build a progress report for one student's submissions.
///
/// # Errors
///
/// Returns [`Error::ProgramNotFound`] when the catalog has no requirement
/// entry for `program`.
pub fn progress_report(
    catalog: &Catalog,
    program: &str,
    submissions: &[Submission],
) -> Result<ProgressReport, Error> {
    let requirement = catalog.requirement_for(program)?;

    let mut total_earned: u32 = 0;
    let mut per_category: HashMap<&str, u32> = HashMap::new();
    for submission in submissions
        .iter()
        .filter(|s| s.status == SubmissionStatus::Approved)
    {
        total_earned += submission.points;
        *per_category
            .entry(submission.category_id.as_str())
            .or_insert(0) += submission.points;
    }

    let categories = catalog
        .categories
        .iter()
        .map(|category| {
            let earned = per_category.get(category.id.as_str()).copied().unwrap_or(0);
            let minimum = requirement
                .category_minimums
                .get(&category.id)
                .copied()
                .unwrap_or(0);
            CategoryProgress {
                category_id: category.id.clone(),
                earned,
                minimum,
                met: earned >= minimum,
            }
        })
        .collect();

    let total_required = requirement.total_required;
    Ok(ProgressReport {
        program: requirement.program.clone(),
        total_earned,
        total_required,
        remaining: total_required.saturating_sub(total_earned),
        percent_complete: percent_of(total_earned, total_required),
        categories,
    })
}

/// Aggregate counts over a set of submissions (the admin dashboard tiles).
pub fn activity_stats(submissions: &[Submission]) -> ActivityStats {
    let mut stats = ActivityStats {
        total: submissions.len(),
        pending: 0,
        approved: 0,
        rejected: 0,
        points_awarded: 0,
    };
    for submission in submissions {
        match submission.status {
            SubmissionStatus::Pending => stats.pending += 1,
            SubmissionStatus::Approved => {
                stats.approved += 1;
                stats.points_awarded += submission.points;
            }
            SubmissionStatus::Rejected => stats.rejected += 1,
        }
    }
    stats
}

/// Nearest-percent progress, capped at 100.
fn percent_of(earned: u32, required: u32) -> u32 {
    if required == 0 {
        return 100;
    }
    let rounded = (u64::from(earned) * 100 + u64::from(required) / 2) / u64::from(required);
    rounded.min(100) as u32
}
