use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{Submission, SubmissionStatus};
use crate::catalog::Catalog;
use crate::error::Error;
use crate::scoring::compute_points;

/// Client-supplied form fields for a new submission.
///
/// Everything here is untrusted input; [`submit`] checks it against the
/// catalog before a [`Submission`] record exists at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub student_id: String,
    pub student_name: String,
    pub category_id: String,
    pub sub_activity_id: String,
    /// Required for custom ("other") entries, ignored otherwise.
    pub custom_activity_name: Option<String>,
    pub level_id: String,
    #[serde(default)]
    pub is_winner: bool,
    pub duration: Option<String>,
    pub evidence_type: Option<String>,
    pub remarks: Option<String>,
}

/// Validate a draft against the catalog and produce a pending submission.
///
/// The draft's ids must resolve, the sub-activity must belong to the
/// drafted category, custom entries need an activity name, and any
/// evidence type must be one the sub-activity accepts. The points figure
/// is computed here and frozen on the record.
///
/// # Errors
///
/// - [`Error::CategoryNotFound`] / [`Error::SubActivityNotFound`] for
///   unknown ids
/// - [`Error::InvalidSubmission`] for category mismatches, missing custom
///   names, unknown levels, and disallowed evidence types
/// - [`Error::UnscorableSubmission`] when no scoring rule matches; drafts
///   that would default to zero points are refused rather than recorded
pub fn submit(
    catalog: &Catalog,
    draft: SubmissionDraft,
    now: DateTime<Utc>,
) -> Result<Submission, Error> {
    catalog.lookup_category(&draft.category_id)?;
    let sub_activity = catalog.lookup_sub_activity(&draft.sub_activity_id)?;

    if sub_activity.category_id != draft.category_id {
        return Err(Error::InvalidSubmission(format!(
            "sub-activity {} belongs to category {}, not {}",
            sub_activity.id, sub_activity.category_id, draft.category_id
        )));
    }

    let activity_name = if sub_activity.is_custom {
        match draft.custom_activity_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(Error::InvalidSubmission(format!(
                    "custom sub-activity {} requires an activity name",
                    sub_activity.id
                )));
            }
        }
    } else {
        sub_activity.name.clone()
    };

    if catalog.level(&draft.level_id).is_none() {
        return Err(Error::InvalidSubmission(format!(
            "unknown participation level: {}",
            draft.level_id
        )));
    }

    if let Some(evidence) = &draft.evidence_type {
        if !sub_activity.allows_evidence(evidence) {
            return Err(Error::InvalidSubmission(format!(
                "evidence type '{}' is not accepted for {} (expected one of: {})",
                evidence,
                sub_activity.id,
                sub_activity.evidence_required.join(", ")
            )));
        }
    }

    let scored = compute_points(
        sub_activity,
        &draft.level_id,
        draft.is_winner,
        draft.duration.as_deref(),
    );
    if scored.is_defaulted() {
        return Err(Error::UnscorableSubmission {
            sub_activity: sub_activity.id.clone(),
            level: draft.level_id.clone(),
        });
    }

    let submission = Submission {
        student_id: draft.student_id,
        student_name: draft.student_name,
        category_id: draft.category_id,
        sub_activity_id: draft.sub_activity_id,
        activity_name,
        level_id: draft.level_id,
        is_winner: draft.is_winner,
        duration: draft.duration,
        evidence_type: draft.evidence_type,
        remarks: draft.remarks,
        points: scored.points,
        status: SubmissionStatus::Pending,
        submitted_at: now,
        review: None,
    };
    debug!(
        student = %submission.student_id,
        sub_activity = %submission.sub_activity_id,
        level = %submission.level_id,
        points = submission.points,
        "submission accepted"
    );
    Ok(submission)
}
