//! Ports - Interfaces between the client core and the outside world.
//!
//! Following hexagonal architecture, ports define the contracts the
//! application layer depends on; adapters implement them.
//!
//! - `HttpTransport` - dispatching requests over the wire
//! - `TokenRefresher` - exchanging the refresh secret for a new token
//! - `SubmissionListener` - the UI notification boundary

mod http_transport;
mod submission_listener;
mod token_refresher;

pub use http_transport::{
    ApiRequest, ApiResponse, FilePart, HttpTransport, Method, MultipartForm, RequestBody,
    TransportError,
};
pub use submission_listener::{SubmissionListener, SubmissionNotice};
pub use token_refresher::TokenRefresher;
