//! SubmissionListener port - the UI notification boundary.
//!
//! The coordinator emits lifecycle transitions and categorized notices;
//! presentation (styling, timing, dismissal) belongs to the view layer.
//! Each notice category is distinct and non-overlapping: a content
//! rejection must never be rendered as a generic error, and vice versa.

use crate::domain::foundation::ValidationError;
use crate::domain::post::SubmissionState;

/// Categorized message emitted once per resolved submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionNotice {
    /// The post was accepted and published.
    PostAccepted,

    /// The server's authenticity screen rejected the content. The draft is
    /// preserved; the user may amend and resubmit.
    ContentRejected,

    /// The session is no longer valid; the user must sign in again.
    SessionExpired,

    /// The draft failed local validation; no network call was made.
    InvalidDraft(ValidationError),

    /// Network or server failure; submitting again is safe.
    SubmissionFailed,
}

/// Receives the coordinator's outward-facing signals.
///
/// Implementations must be cheap and non-blocking; they run on the
/// submission path.
pub trait SubmissionListener: Send + Sync {
    /// The coordinator entered a new lifecycle state. The view reads this
    /// to enable or disable the submit control.
    fn state_changed(&self, state: SubmissionState);

    /// A submission attempt resolved with the given category.
    fn notice(&self, notice: SubmissionNotice);

    /// An accepted submission should return the user to the feed, whose
    /// own re-fetch will surface the new post.
    fn navigate_to_feed(&self);
}
