//! TokenRefresher port - exchanging the refresh secret for a new access token.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::foundation::{AccessToken, AuthError};

/// Exchanges the long-lived refresh secret for a fresh access token.
///
/// Consumed only by the credential interceptor; callers never trigger a
/// refresh directly.
///
/// # Contract
///
/// - `Ok(token)` - the auth service issued a new access token
/// - `Err(AuthError::RefreshRejected)` - the secret was refused; the
///   session is over
/// - `Err(AuthError::ServiceUnavailable)` - the auth service could not be
///   reached
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh(&self, refresh_token: &SecretString) -> Result<AccessToken, AuthError>;
}
