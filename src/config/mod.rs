//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `VERIPOST`
//! prefix and `__` as the nesting separator, e.g.
//! `VERIPOST__API__BASE_URL=https://api.example.com`.

mod api;
mod error;
mod media;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use media::MediaConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Backend endpoint configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Local media validation bounds
    #[serde(default)]
    pub media: MediaConfig,
}

impl AppConfig {
    /// Loads configuration from the environment, honoring a `.env` file in
    /// development.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VERIPOST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of all sections.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.media.validate()?;
        Ok(())
    }
}
