//! Submission lifecycle state and per-attempt outcomes.

use crate::domain::foundation::ValidationError;
use crate::ports::TransportError;

/// UI-facing lifecycle of the submission coordinator.
///
/// `Idle → Submitting → Idle`; while `Submitting`, no second attempt may be
/// dispatched from the same coordinator. The view layer reads this
/// reactively to disable the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// The server's distinguished policy verdicts.
///
/// Not a transient failure: retrying the same content will produce the
/// same verdict, so it must never be presented as a generic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The authenticity screen flagged the media as machine-generated.
    AutomatedContentDetected,
}

/// Exactly one outcome is produced per submission attempt.
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    /// The server accepted and published the post.
    Accepted,

    /// The server's content screen rejected the post. The draft is kept so
    /// the user can amend it; resubmission is allowed immediately.
    Rejected(RejectionReason),

    /// Local validation failed; no network call was made.
    ValidationFailed(ValidationError),

    /// Credential refresh failed or the replayed request was refused
    /// again. The user must re-authenticate.
    AuthExpired,

    /// Network or server failure. Safe to retry by submitting again.
    TransportFailed(TransportError),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }
}
