//! Foundation types shared by every domain module.

mod auth;
mod errors;

pub use auth::{AccessToken, AuthError, AuthSession, Credential};
pub use errors::ValidationError;
