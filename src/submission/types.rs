use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Review state of a submission.
///
/// ```text
/// pending → approved
///         → rejected
/// ```
///
/// Both outcomes are terminal; a decided submission is never re-reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome a reviewer selects for a pending submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    /// The status a submission moves to under this decision.
    #[must_use]
    pub const fn target_status(self) -> SubmissionStatus {
        match self {
            Self::Approve => SubmissionStatus::Approved,
            Self::Reject => SubmissionStatus::Rejected,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for ReviewDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reviewer metadata recorded when a submission is decided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub reviewer: String,
    pub remarks: Option<String>,
    pub reviewed_at: DateTime<Utc>,
}

/// An activity submission with its frozen points figure.
///
/// Points are computed once at intake and stored; later catalog revisions
/// never reprice existing records. Persistence is the caller's concern,
/// the record is plain serde data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub student_id: String,
    pub student_name: String,
    pub category_id: String,
    pub sub_activity_id: String,
    /// Catalog name, or the student's own title for custom entries.
    pub activity_name: String,
    pub level_id: String,
    #[serde(default)]
    pub is_winner: bool,
    pub duration: Option<String>,
    pub evidence_type: Option<String>,
    pub remarks: Option<String>,
    pub points: u32,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
    pub review: Option<Review>,
}

impl Submission {
    /// Apply a reviewer's decision, moving the submission out of `Pending`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] when the submission has already
    /// been decided.
    pub fn apply_review(&mut self, decision: ReviewDecision, review: Review) -> Result<(), Error> {
        let next = decision.target_status();
        if !self.status.can_transition_to(next) {
            return Err(Error::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.review = Some(review);
        Ok(())
    }
}
