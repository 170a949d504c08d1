pub mod submission;

pub use submission::{SubmissionOutcome, Submitter};
