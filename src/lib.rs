//! # map-points
//!
//! Activity taxonomy and points engine for a university MAP (Mandatory
//! Activity Points) program.
//!
//! This crate provides the pure rule layer a points portal is built on:
//! - The activity catalog: categories, participation levels,
//!   sub-activities, and per-program requirements, shipped as a versioned
//!   builtin dataset or loaded from YAML
//! - The points engine: duration tables, the fixed level-credit table,
//!   and the per-activity fallback, with a tagged scoring basis
//! - Submission intake and the pending/approved/rejected review lifecycle
//! - Progress reports against program requirements and aggregate stats
//!
//! There is no I/O here: the catalog is an injected value, submissions are
//! plain serde records, and persistence, HTTP, and display belong to the
//! caller.
//!
//! ```
//! use map_points::{compute_points, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let hackathon = catalog.lookup_sub_activity("A5")?;
//! let result = compute_points(hackathon, "national", false, None);
//! assert_eq!(result.points, 12);
//! # Ok::<(), map_points::Error>(())
//! ```

pub mod catalog;
pub mod error;
pub mod progress;
pub mod scoring;
pub mod submission;

pub use catalog::{validate_catalog, Catalog, Category, ParticipationLevel, ProgramRequirement, SubActivity};
pub use error::Error;
pub use progress::{activity_stats, progress_report, ActivityStats, CategoryProgress, ProgressReport};
pub use scoring::{compute_points, level_credit, PointsBasis, PointsResult, LEVEL_CREDITS};
pub use submission::{submit, Review, ReviewDecision, Submission, SubmissionDraft, SubmissionStatus};
