mod intake;
mod types;

pub use intake::{submit, SubmissionDraft};
pub use types::{Review, ReviewDecision, Submission, SubmissionStatus};
