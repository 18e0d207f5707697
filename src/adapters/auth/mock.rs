//! Mock token refresher for testing.
//!
//! Scripted results, a call counter, and an optional artificial delay so
//! tests can hold a refresh in flight long enough for concurrent requests
//! to pile up behind it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::foundation::{AccessToken, AuthError};
use crate::ports::TokenRefresher;

/// Mock `TokenRefresher` with a programmable result.
pub struct MockTokenRefresher {
    result: Mutex<Result<AccessToken, AuthError>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockTokenRefresher {
    /// Always succeeds with the given token.
    pub fn returning(token: impl Into<String>) -> Self {
        Self {
            result: Mutex::new(Ok(AccessToken::new(token))),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with the given error.
    pub fn failing(error: AuthError) -> Self {
        Self {
            result: Mutex::new(Err(error)),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Adds an artificial delay before each refresh resolves.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Changes the scripted result at runtime.
    pub fn set_result(&self, result: Result<AccessToken, AuthError>) {
        *self.result.lock().unwrap() = result;
    }

    /// Number of refresh calls performed so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenRefresher for MockTokenRefresher {
    async fn refresh(&self, _refresh_token: &SecretString) -> Result<AccessToken, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretString {
        SecretString::new("secret".into())
    }

    #[tokio::test]
    async fn returning_refresher_hands_out_token_and_counts_calls() {
        let refresher = MockTokenRefresher::returning("fresh");

        let token = refresher.refresh(&secret()).await.unwrap();
        refresher.refresh(&secret()).await.unwrap();

        assert_eq!(token.as_str(), "fresh");
        assert_eq!(refresher.call_count(), 2);
    }

    #[tokio::test]
    async fn failing_refresher_returns_scripted_error() {
        let refresher = MockTokenRefresher::failing(AuthError::RefreshRejected);

        let result = refresher.refresh(&secret()).await;

        assert!(matches!(result, Err(AuthError::RefreshRejected)));
    }

    #[tokio::test]
    async fn set_result_changes_behavior_at_runtime() {
        let refresher = MockTokenRefresher::failing(AuthError::RefreshRejected);
        refresher.set_result(Ok(AccessToken::new("second-wind")));

        let token = refresher.refresh(&secret()).await.unwrap();

        assert_eq!(token.as_str(), "second-wind");
    }
}
