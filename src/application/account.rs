//! Account service: register, login, logout.
//!
//! Login and register talk to the raw transport since no credential exists
//! yet. A successful login initializes the process-wide [`AuthSession`];
//! logout tears it down.

use std::sync::Arc;

use http::StatusCode;
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::foundation::{AccessToken, AuthSession, Credential};
use crate::ports::{ApiRequest, HttpTransport, TransportError};

const REGISTER_PATH: &str = "/api/auth/register";
const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Debug, Error)]
pub enum AccountError {
    /// Unknown user or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The email is already registered.
    #[error("Email already registered")]
    EmailTaken,

    #[error("Account service returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed account response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Signed-in user's profile as returned by the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(flatten)]
    profile: UserProfile,
    #[serde(rename = "accessToken")]
    access_token: String,
    #[serde(rename = "refreshToken", default)]
    refresh_token: Option<String>,
}

pub struct AccountService {
    transport: Arc<dyn HttpTransport>,
    session: Arc<AuthSession>,
}

impl AccountService {
    pub fn new(transport: Arc<dyn HttpTransport>, session: Arc<AuthSession>) -> Self {
        Self { transport, session }
    }

    /// Creates a new account. The user still has to log in afterwards.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AccountError> {
        let body = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let response = self
            .transport
            .send(ApiRequest::post_json(REGISTER_PATH, body))
            .await?;

        if response.is_success() {
            Ok(())
        } else if response.status == StatusCode::BAD_REQUEST {
            Err(AccountError::EmailTaken)
        } else {
            Err(AccountError::UnexpectedStatus(response.status.as_u16()))
        }
    }

    /// Authenticates and initializes the process-wide session.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AccountError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self
            .transport
            .send(ApiRequest::post_json(LOGIN_PATH, body))
            .await?;

        if response.status == StatusCode::BAD_REQUEST || response.status == StatusCode::NOT_FOUND {
            return Err(AccountError::InvalidCredentials);
        }
        if !response.is_success() {
            return Err(AccountError::UnexpectedStatus(response.status.as_u16()));
        }

        let decoded: LoginResponse = response.json()?;
        let refresh_token = SecretString::new(
            decoded
                .refresh_token
                .unwrap_or_else(|| decoded.access_token.clone()),
        );
        self.session
            .sign_in(Credential::new(
                AccessToken::new(decoded.access_token),
                refresh_token,
            ))
            .await;

        tracing::info!(username = %decoded.profile.username, "signed in");
        Ok(decoded.profile)
    }

    /// Tears the session down.
    pub async fn logout(&self) {
        self.session.sign_out().await;
        tracing::info!("signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::MockTransport;

    fn service(transport: Arc<MockTransport>) -> (AccountService, Arc<AuthSession>) {
        let session = Arc::new(AuthSession::new());
        (
            AccountService::new(transport, session.clone()),
            session,
        )
    }

    fn login_body() -> serde_json::Value {
        serde_json::json!({
            "_id": "65f1",
            "username": "alice",
            "email": "alice@example.com",
            "profilePicture": "",
            "accessToken": "access-1",
            "refreshToken": "refresh-1"
        })
    }

    #[tokio::test]
    async fn login_initializes_the_session() {
        let transport = Arc::new(MockTransport::with_json(StatusCode::OK, login_body()));
        let (service, session) = service(transport);

        let profile = service.login("alice@example.com", "pw").await.unwrap();

        assert_eq!(profile.username, "alice");
        assert!(session.is_signed_in().await);
        assert_eq!(session.access_token().await.unwrap().as_str(), "access-1");
    }

    #[tokio::test]
    async fn login_failure_maps_to_invalid_credentials() {
        for status in [StatusCode::BAD_REQUEST, StatusCode::NOT_FOUND] {
            let transport = Arc::new(MockTransport::with_status(status));
            let (service, session) = service(transport);

            let result = service.login("alice@example.com", "wrong").await;

            assert!(matches!(result, Err(AccountError::InvalidCredentials)));
            assert!(!session.is_signed_in().await);
        }
    }

    #[tokio::test]
    async fn login_without_refresh_token_still_signs_in() {
        let mut body = login_body();
        body.as_object_mut().unwrap().remove("refreshToken");
        let transport = Arc::new(MockTransport::with_json(StatusCode::OK, body));
        let (service, session) = service(transport);

        service.login("alice@example.com", "pw").await.unwrap();

        assert!(session.refresh_token().await.is_some());
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        let transport = Arc::new(MockTransport::with_json(StatusCode::OK, login_body()));
        let (service, session) = service(transport);
        service.login("alice@example.com", "pw").await.unwrap();

        service.logout().await;

        assert!(!session.is_signed_in().await);
    }

    #[tokio::test]
    async fn register_maps_duplicate_email() {
        let transport = Arc::new(MockTransport::with_status(StatusCode::BAD_REQUEST));
        let (service, _) = service(transport);

        let result = service.register("alice", "alice@example.com", "pw").await;

        assert!(matches!(result, Err(AccountError::EmailTaken)));
    }

    #[tokio::test]
    async fn register_succeeds_on_2xx() {
        let transport = Arc::new(MockTransport::with_json(
            StatusCode::OK,
            serde_json::json!({ "_id": "1", "username": "alice", "email": "a@b.c" }),
        ));
        let (service, _) = service(transport.clone());

        service.register("alice", "a@b.c", "pw").await.unwrap();

        assert_eq!(transport.requests_to(REGISTER_PATH), 1);
    }
}
