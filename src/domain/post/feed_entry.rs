//! Feed entry as the backend serializes it.

use chrono::NaiveDateTime;
use serde::Deserialize;

fn unknown_username() -> String {
    "Unknown".to_string()
}

/// A published post returned by the timeline endpoint.
///
/// Field names mirror the server's wire format; `created_at` is a naive
/// ISO-8601 timestamp without offset and may be null for legacy records.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Set by the server once the content passed authenticity screening.
    #[serde(default)]
    pub verified: bool,

    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,

    #[serde(default = "unknown_username")]
    pub username: String,
}
