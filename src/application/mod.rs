//! Application layer: the authenticated submission pipeline and the
//! services built on top of it.
//!
//! - `AuthenticatedClient` - credential interceptor (attach, refresh, replay)
//! - `SubmissionCoordinator` - one post-creation attempt, end to end
//! - `AccountService` - register / login / logout
//! - `FeedReader` - timeline fetch

mod account;
mod authenticated_client;
mod feed;
mod submit_post;

pub use account::{AccountError, AccountService, UserProfile};
pub use authenticated_client::{AuthenticatedClient, ClientError};
pub use feed::{FeedError, FeedReader};
pub use submit_post::SubmissionCoordinator;
