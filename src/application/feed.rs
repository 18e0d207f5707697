//! Feed reader: the timeline fetch.
//!
//! A plain read path with no state machine of its own. It goes through the
//! credential interceptor like every authorized call, so an expiring token
//! during a fetch is repaired transparently.

use std::sync::Arc;

use thiserror::Error;

use crate::application::authenticated_client::{AuthenticatedClient, ClientError};
use crate::domain::post::Post;
use crate::ports::ApiRequest;

const TIMELINE_PATH: &str = "/api/timeline/all";

#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Timeline returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed timeline response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Fetches the timeline, newest first as the server orders it.
pub struct FeedReader {
    client: Arc<AuthenticatedClient>,
}

impl FeedReader {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }

    pub async fn timeline(&self) -> Result<Vec<Post>, FeedError> {
        let response = self.client.send(ApiRequest::get(TIMELINE_PATH)).await?;
        if !response.is_success() {
            return Err(FeedError::UnexpectedStatus(response.status.as_u16()));
        }
        let posts = response.json()?;
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockTokenRefresher;
    use crate::adapters::http::MockTransport;
    use crate::domain::foundation::{AccessToken, AuthSession, Credential};
    use http::StatusCode;
    use secrecy::SecretString;

    async fn reader(transport: Arc<MockTransport>) -> FeedReader {
        let session = Arc::new(AuthSession::new());
        session
            .sign_in(Credential::new(
                AccessToken::new("valid"),
                SecretString::new("refresh-secret".into()),
            ))
            .await;
        FeedReader::new(Arc::new(AuthenticatedClient::new(
            transport,
            Arc::new(MockTokenRefresher::returning("unused")),
            session,
        )))
    }

    #[tokio::test]
    async fn timeline_decodes_backend_shape() {
        let body = serde_json::json!([
            {
                "_id": "1",
                "description": "first",
                "image_url": "https://cdn.example.com/1.png",
                "verified": true,
                "created_at": "2026-08-23T09:00:00.000001",
                "username": "alice"
            },
            { "_id": "2", "created_at": null }
        ]);
        let transport = Arc::new(MockTransport::with_json(StatusCode::OK, body));

        let posts = reader(transport).await.timeline().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].username, "alice");
        assert!(posts[0].verified);
        assert!(posts[1].created_at.is_none());
        assert_eq!(posts[1].username, "Unknown");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let transport = Arc::new(MockTransport::with_status(StatusCode::INTERNAL_SERVER_ERROR));

        let result = reader(transport).await.timeline().await;

        assert!(matches!(result, Err(FeedError::UnexpectedStatus(500))));
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let transport = Arc::new(MockTransport::with_json(
            StatusCode::OK,
            serde_json::json!({ "not": "a list" }),
        ));

        let result = reader(transport).await.timeline().await;

        assert!(matches!(result, Err(FeedError::Malformed(_))));
    }
}
