//! Authentication types and the process-wide credential holder.
//!
//! `AuthSession` is the single owner of the current user's credential.
//! It is initialized on login, cleared on logout, and mutated in between
//! only by the credential interceptor after a successful refresh. Nothing
//! else in the crate touches tokens directly.
//!
//! The refresh secret is wrapped in [`secrecy::SecretString`] so it never
//! shows up in `Debug` output or logs.

use secrecy::SecretString;
use thiserror::Error;
use tokio::sync::RwLock;

/// Short-lived access token attached to outgoing requests as a bearer
/// credential. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The full credential pair held while a user is signed in.
pub struct Credential {
    /// Current access token; replaced in place by a refresh.
    pub access_token: AccessToken,

    /// Longer-lived secret exchanged for fresh access tokens.
    pub refresh_token: SecretString,
}

impl Credential {
    pub fn new(access_token: AccessToken, refresh_token: SecretString) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

/// Authentication errors surfaced by the refresh flow.
///
/// Domain-centric: these describe what the client should do next, not what
/// the auth endpoint answered.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No usable credential remains; the user must re-authenticate.
    #[error("Session expired, please sign in again")]
    SessionExpired,

    /// The auth service refused the refresh secret.
    #[error("Credential refresh rejected")]
    RefreshRejected,

    /// The auth service could not be reached.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}

/// Process-wide credential holder.
///
/// Explicit lifecycle: [`sign_in`](AuthSession::sign_in) on login,
/// [`sign_out`](AuthSession::sign_out) on logout. The interceptor reads
/// tokens through the accessors and writes refreshed access tokens through
/// [`store_access_token`](AuthSession::store_access_token).
#[derive(Default)]
pub struct AuthSession {
    credential: RwLock<Option<Credential>>,
}

impl AuthSession {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a credential after a successful login.
    pub async fn sign_in(&self, credential: Credential) {
        *self.credential.write().await = Some(credential);
    }

    /// Drops the credential. In-flight refreshes completing afterwards are
    /// ignored, they cannot resurrect the session.
    pub async fn sign_out(&self) {
        *self.credential.write().await = None;
    }

    pub async fn is_signed_in(&self) -> bool {
        self.credential.read().await.is_some()
    }

    /// Current access token, if signed in.
    pub async fn access_token(&self) -> Option<AccessToken> {
        self.credential
            .read()
            .await
            .as_ref()
            .map(|c| c.access_token.clone())
    }

    /// Current refresh secret, if signed in.
    pub async fn refresh_token(&self) -> Option<SecretString> {
        self.credential
            .read()
            .await
            .as_ref()
            .map(|c| c.refresh_token.clone())
    }

    /// Replaces the access token after a successful refresh, keeping the
    /// refresh secret. A no-op when signed out.
    pub async fn store_access_token(&self, token: AccessToken) {
        if let Some(credential) = self.credential.write().await.as_mut() {
            credential.access_token = token;
        }
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession").finish_non_exhaustive()
    }
}
