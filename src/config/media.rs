//! Media validation configuration.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::post::MediaPolicy;

/// Bounds for local draft validation.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: usize,

    #[serde(default = "default_max_description_chars")]
    pub max_description_chars: usize,
}

impl MediaConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_file_bytes == 0 {
            return Err(ValidationError::MustBePositive("media.max_file_bytes"));
        }
        if self.max_description_chars == 0 {
            return Err(ValidationError::MustBePositive("media.max_description_chars"));
        }
        Ok(())
    }

    pub fn policy(&self) -> MediaPolicy {
        MediaPolicy {
            max_file_bytes: self.max_file_bytes,
            max_description_chars: self.max_description_chars,
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: default_max_file_bytes(),
            max_description_chars: default_max_description_chars(),
        }
    }
}

fn default_max_file_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_max_description_chars() -> usize {
    500
}
