use thiserror::Error;

use crate::submission::SubmissionStatus;

/// Errors surfaced by catalog lookups, submission intake, and review
/// transitions.
///
/// Point computation itself never fails; an unscoreable combination yields
/// a zero-point [`crate::scoring::PointsResult`] tagged as
/// [`crate::scoring::PointsBasis::Unscored`] instead of an error.
#[derive(Debug, Error)]
pub enum Error {
    /// No category with this id exists in the catalog.
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// No sub-activity with this id exists in the catalog.
    #[error("sub-activity not found: {0}")]
    SubActivityNotFound(String),

    /// No program requirement with this name exists in the catalog.
    #[error("program not found: {0}")]
    ProgramNotFound(String),

    /// A submission draft failed validation against the catalog.
    #[error("invalid submission: {0}")]
    InvalidSubmission(String),

    /// A submission draft resolved to the zero-point default; the level is
    /// unknown to both the fixed credit table and the sub-activity's own
    /// point table.
    #[error("submission cannot be scored: sub-activity {sub_activity}, level {level}")]
    UnscorableSubmission { sub_activity: String, level: String },

    /// A review was applied to a submission that is no longer pending.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: SubmissionStatus,
        to: SubmissionStatus,
    },

    /// A catalog document could not be parsed.
    #[error("failed to parse catalog document: {0}")]
    CatalogParse(String),

    /// A catalog document parsed but failed integrity validation.
    #[error("invalid catalog dataset: {}", .0.join("; "))]
    InvalidCatalog(Vec<String>),
}
