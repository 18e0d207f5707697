//! Credential interceptor: attaches the bearer token and repairs it on 401.
//!
//! Every authorized request flows through [`AuthenticatedClient::send`].
//! The caller never manages token expiry: on a 401 the client refreshes
//! the credential and replays the original request exactly once. Multiple
//! requests failing on the same expired credential share a single
//! in-flight refresh through a shared future handle, so one failure wave
//! costs one refresh call no matter how many requests it hits.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use http::StatusCode;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::foundation::{AccessToken, AuthError, AuthSession};
use crate::ports::{ApiRequest, ApiResponse, HttpTransport, TokenRefresher, TransportError};

/// Errors leaving the interceptor.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

type RefreshFuture = Shared<BoxFuture<'static, Result<AccessToken, AuthError>>>;

struct PendingRefresh {
    generation: u64,
    future: RefreshFuture,
}

/// HTTP client wrapper that keeps every request authorized.
pub struct AuthenticatedClient {
    transport: Arc<dyn HttpTransport>,
    refresher: Arc<dyn TokenRefresher>,
    session: Arc<AuthSession>,
    // Single-flight refresh handle; late-arriving failed requests attach
    // to it instead of starting their own refresh.
    pending_refresh: Mutex<Option<PendingRefresh>>,
    refresh_generation: AtomicU64,
}

impl AuthenticatedClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        refresher: Arc<dyn TokenRefresher>,
        session: Arc<AuthSession>,
    ) -> Self {
        Self {
            transport,
            refresher,
            session,
            pending_refresh: Mutex::new(None),
            refresh_generation: AtomicU64::new(0),
        }
    }

    pub fn session(&self) -> &Arc<AuthSession> {
        &self.session
    }

    /// Dispatches a request with the current credential.
    ///
    /// On a 401 the credential is refreshed once and the request replayed
    /// once. A 401 on the replay, or a failed refresh, resolves to
    /// [`AuthError::SessionExpired`]; there is no further retry.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let token = self
            .session
            .access_token()
            .await
            .ok_or(AuthError::SessionExpired)?;

        let response = self
            .transport
            .send(request.clone().with_bearer(token.as_str()))
            .await?;
        if response.status != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        tracing::debug!(path = %request.path, "request unauthorized, refreshing credential");
        let fresh = self.await_refresh().await.map_err(|e| {
            tracing::warn!(error = %e, "credential refresh failed, session expired");
            AuthError::SessionExpired
        })?;

        let replay = self
            .transport
            .send(request.with_bearer(fresh.as_str()))
            .await?;
        if replay.status == StatusCode::UNAUTHORIZED {
            // Retry budget spent. A fresh credential that still gets a 401
            // means the session itself is no longer valid.
            tracing::warn!("replayed request unauthorized with fresh credential");
            return Err(AuthError::SessionExpired.into());
        }

        Ok(replay)
    }

    /// Joins the in-flight refresh if one exists, otherwise starts it.
    ///
    /// At most one refresh call reaches the auth service per overlapping
    /// failure wave. The generation tag ensures a waiter only clears the
    /// slot for the refresh it actually awaited.
    async fn await_refresh(&self) -> Result<AccessToken, AuthError> {
        let (generation, future) = {
            let mut pending = self.pending_refresh.lock().await;
            match pending.as_ref() {
                Some(in_flight) => (in_flight.generation, in_flight.future.clone()),
                None => {
                    let generation = self.refresh_generation.fetch_add(1, Ordering::Relaxed) + 1;
                    let refresher = Arc::clone(&self.refresher);
                    let session = Arc::clone(&self.session);
                    let future = async move {
                        let secret = session
                            .refresh_token()
                            .await
                            .ok_or(AuthError::SessionExpired)?;
                        let token = refresher.refresh(&secret).await?;
                        session.store_access_token(token.clone()).await;
                        tracing::debug!("credential refreshed");
                        Ok(token)
                    }
                    .boxed()
                    .shared();
                    *pending = Some(PendingRefresh {
                        generation,
                        future: future.clone(),
                    });
                    (generation, future)
                }
            }
        };

        let result = future.await;

        let mut pending = self.pending_refresh.lock().await;
        if pending
            .as_ref()
            .is_some_and(|in_flight| in_flight.generation == generation)
        {
            *pending = None;
        }

        result
    }
}

impl std::fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedClient").finish_non_exhaustive()
    }
}
