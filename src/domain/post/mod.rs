//! Post domain: drafts, validation policy, outcomes, feed entries.

mod draft;
mod feed_entry;
mod outcome;

pub use draft::{MediaFile, MediaPolicy, MediaType, PostDraft};
pub use feed_entry::Post;
pub use outcome::{RejectionReason, SubmissionOutcome, SubmissionState};
