//! Production `TokenRefresher` against the auth-refresh endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AccessToken, AuthError};
use crate::ports::{ApiRequest, HttpTransport, TokenRefresher};

const REFRESH_PATH: &str = "/api/auth/refresh";

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
}

/// Exchanges the refresh secret at `POST /api/auth/refresh`.
///
/// Talks to the raw transport, not the credential interceptor: the refresh
/// call itself must never trigger another refresh.
pub struct ApiTokenRefresher {
    transport: Arc<dyn HttpTransport>,
}

impl ApiTokenRefresher {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl TokenRefresher for ApiTokenRefresher {
    async fn refresh(&self, refresh_token: &SecretString) -> Result<AccessToken, AuthError> {
        let body = serde_json::json!({ "refreshToken": refresh_token.expose_secret() });
        let request = ApiRequest::post_json(REFRESH_PATH, body);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        if response.status == StatusCode::UNAUTHORIZED || response.status == StatusCode::FORBIDDEN {
            tracing::warn!("refresh secret rejected by auth service");
            return Err(AuthError::RefreshRejected);
        }
        if !response.is_success() {
            return Err(AuthError::service_unavailable(format!(
                "refresh endpoint returned {}",
                response.status
            )));
        }

        let decoded: RefreshResponse = response
            .json()
            .map_err(|e| AuthError::service_unavailable(format!("malformed refresh response: {e}")))?;

        Ok(AccessToken::new(decoded.access_token))
    }
}
