//! Submission coordinator: one post-creation attempt, end to end.
//!
//! The coordinator owns the draft and the `Idle`/`Submitting` lifecycle.
//! A `submit()` call validates locally, transitions to `Submitting` before
//! the first await (so the view can disable its control against rapid
//! repeated triggers), dispatches the multipart payload through the
//! credential interceptor, and maps every possible result to exactly one
//! [`SubmissionOutcome`]. Whatever happens, the state returns to `Idle`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use http::StatusCode;

use crate::application::authenticated_client::{AuthenticatedClient, ClientError};
use crate::domain::foundation::ValidationError;
use crate::domain::post::{
    MediaFile, MediaPolicy, PostDraft, RejectionReason, SubmissionOutcome, SubmissionState,
};
use crate::ports::{
    ApiRequest, FilePart, MultipartForm, SubmissionListener, SubmissionNotice, TransportError,
};

const CREATE_POST_PATH: &str = "/api/create-post";

/// Per-attempt state owner for one content-creation action.
pub struct SubmissionCoordinator {
    client: Arc<AuthenticatedClient>,
    listener: Arc<dyn SubmissionListener>,
    policy: MediaPolicy,
    draft: Mutex<PostDraft>,
    state: Mutex<SubmissionState>,
    // Set on view teardown; an in-flight attempt finishes but its outcome
    // is discarded instead of mutating a dead view.
    closed: AtomicBool,
}

impl SubmissionCoordinator {
    pub fn new(
        client: Arc<AuthenticatedClient>,
        listener: Arc<dyn SubmissionListener>,
        policy: MediaPolicy,
    ) -> Self {
        Self {
            client,
            listener,
            policy,
            draft: Mutex::new(PostDraft::new()),
            state: Mutex::new(SubmissionState::Idle),
            closed: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock().unwrap()
    }

    /// Snapshot of the current draft.
    pub fn draft(&self) -> PostDraft {
        self.draft.lock().unwrap().clone()
    }

    pub fn set_description(&self, description: impl Into<String>) {
        self.draft.lock().unwrap().description = description.into();
    }

    pub fn attach_media(&self, media: MediaFile) {
        self.draft.lock().unwrap().media = Some(media);
    }

    pub fn remove_media(&self) {
        self.draft.lock().unwrap().media = None;
    }

    /// Marks the owning view as torn down. The in-flight request, if any,
    /// runs to completion but its outcome is discarded.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Submits the current draft.
    ///
    /// Returns `None` when a submission is already in flight (the call is
    /// a no-op, neither queued nor an error). Otherwise resolves to exactly
    /// one outcome. Validation failures resolve before any network call.
    pub async fn submit(&self) -> Option<SubmissionOutcome> {
        let (draft, media) = {
            let mut state = self.state.lock().unwrap();
            if state.is_submitting() {
                tracing::debug!("submission already in flight, ignoring");
                return None;
            }

            let draft = self.draft.lock().unwrap().clone();
            if let Err(reason) = self.policy.validate(&draft) {
                drop(state);
                return Some(self.resolve_invalid(reason));
            }
            let Some(media) = draft.media.clone() else {
                // Validation guarantees media; keep the invariant local.
                drop(state);
                return Some(self.resolve_invalid(ValidationError::MissingMedia));
            };

            *state = SubmissionState::Submitting;
            (draft, media)
        };
        // The control is disabled before the first await point.
        self.listener.state_changed(SubmissionState::Submitting);

        let outcome = self.dispatch(&draft, media).await;

        if self.closed.load(Ordering::SeqCst) {
            tracing::debug!("coordinator closed during submission, outcome discarded");
            *self.state.lock().unwrap() = SubmissionState::Idle;
            return Some(outcome);
        }

        if outcome.is_accepted() {
            self.draft.lock().unwrap().clear();
        }
        *self.state.lock().unwrap() = SubmissionState::Idle;

        self.listener.state_changed(SubmissionState::Idle);
        self.listener.notice(Self::notice_for(&outcome));
        if outcome.is_accepted() {
            self.listener.navigate_to_feed();
        }

        Some(outcome)
    }

    async fn dispatch(&self, draft: &PostDraft, media: MediaFile) -> SubmissionOutcome {
        let content_type = media
            .media_type()
            .map(|t| t.mime().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let form = MultipartForm::new()
            .text("description", draft.description.clone())
            .file(FilePart {
                field: "file".to_string(),
                file_name: media.file_name,
                content_type,
                bytes: media.bytes,
            });
        let request = ApiRequest::post_multipart(CREATE_POST_PATH, form);

        match self.client.send(request).await {
            Ok(response) if response.is_success() => {
                tracing::info!("post accepted");
                SubmissionOutcome::Accepted
            }
            Ok(response) if response.status == StatusCode::NOT_ACCEPTABLE => {
                // Deliberate server verdict, not a transient failure.
                tracing::info!("post rejected: automated content detected");
                SubmissionOutcome::Rejected(RejectionReason::AutomatedContentDetected)
            }
            Ok(response) => {
                tracing::warn!(status = %response.status, "post creation failed");
                SubmissionOutcome::TransportFailed(TransportError::UnexpectedStatus(
                    response.status.as_u16(),
                ))
            }
            Err(ClientError::Auth(_)) => SubmissionOutcome::AuthExpired,
            Err(ClientError::Transport(error)) => {
                tracing::warn!(error = %error, "post creation failed");
                SubmissionOutcome::TransportFailed(error)
            }
        }
    }

    fn resolve_invalid(&self, reason: ValidationError) -> SubmissionOutcome {
        tracing::debug!(reason = %reason, "draft failed local validation");
        self.listener
            .notice(SubmissionNotice::InvalidDraft(reason.clone()));
        SubmissionOutcome::ValidationFailed(reason)
    }

    fn notice_for(outcome: &SubmissionOutcome) -> SubmissionNotice {
        match outcome {
            SubmissionOutcome::Accepted => SubmissionNotice::PostAccepted,
            SubmissionOutcome::Rejected(_) => SubmissionNotice::ContentRejected,
            SubmissionOutcome::ValidationFailed(reason) => {
                SubmissionNotice::InvalidDraft(reason.clone())
            }
            SubmissionOutcome::AuthExpired => SubmissionNotice::SessionExpired,
            SubmissionOutcome::TransportFailed(_) => SubmissionNotice::SubmissionFailed,
        }
    }
}

impl std::fmt::Debug for SubmissionCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionCoordinator")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
