//! Error types shared across the domain layer.

use thiserror::Error;

/// Errors produced by local draft validation, before any network call.
///
/// Each variant maps to one user-visible message; none of them ever
/// reaches the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No media file attached to the draft. A photo is required.
    #[error("A photo is required")]
    MissingMedia,

    /// The file extension is not in the accepted set.
    #[error("Unsupported media type '{extension}', accepted: {accepted}")]
    UnsupportedMediaType { extension: String, accepted: String },

    /// The media file exceeds the configured size bound.
    #[error("File is {actual} bytes, limit is {limit}")]
    FileTooLarge { limit: usize, actual: usize },

    /// The description exceeds the configured character bound.
    #[error("Description is {actual} characters, limit is {limit}")]
    DescriptionTooLong { limit: usize, actual: usize },
}

impl ValidationError {
    /// Creates an unsupported-media-type error.
    pub fn unsupported_media_type(
        extension: impl Into<String>,
        accepted: impl Into<String>,
    ) -> Self {
        ValidationError::UnsupportedMediaType {
            extension: extension.into(),
            accepted: accepted.into(),
        }
    }
}
