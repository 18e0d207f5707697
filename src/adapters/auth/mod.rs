//! Authentication adapters.
//!
//! Implementations of the `TokenRefresher` port:
//!
//! - `ApiTokenRefresher` - production refresh against the auth endpoint
//! - `MockTokenRefresher` - scripted refresher for tests

mod api_refresher;
mod mock;

pub use api_refresher::ApiTokenRefresher;
pub use mock::MockTokenRefresher;
