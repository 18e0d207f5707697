//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the client core to external systems:
//! - `http` - wire transports (reqwest, mock)
//! - `auth` - token refresh against the auth service

pub mod auth;
pub mod http;
