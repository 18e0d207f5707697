//! HTTP transport adapters.
//!
//! - `ReqwestTransport` - production transport over `reqwest`
//! - `MockTransport` - scripted transport with request recording, for tests

mod mock;
mod reqwest_transport;

pub use mock::MockTransport;
pub use reqwest_transport::ReqwestTransport;
