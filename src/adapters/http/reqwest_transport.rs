//! Production `HttpTransport` over `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;

use crate::config::ApiConfig;
use crate::ports::{ApiRequest, ApiResponse, HttpTransport, Method, RequestBody, TransportError};

/// `reqwest`-backed transport bound to a base URL and a request timeout.
///
/// Everything above this adapter works with port-level types; the mapping
/// to `reqwest` builders lives entirely here.
pub struct ReqwestTransport {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_error(error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout
        } else if error.is_connect() {
            TransportError::Connect(error.to_string())
        } else {
            TransportError::Other(error.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => {
                let mut multipart = reqwest::multipart::Form::new();
                for (field, value) in form.texts {
                    multipart = multipart.text(field, value);
                }
                if let Some(file) = form.file {
                    let part = reqwest::multipart::Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.content_type)
                        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                    multipart = multipart.part(file.field, part);
                }
                builder.multipart(multipart)
            }
        };

        let response = builder.send().await.map_err(Self::map_error)?;
        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| TransportError::Other(e.to_string()))?;
        let body = response.bytes().await.map_err(Self::map_error)?.to_vec();

        Ok(ApiResponse::new(status, body))
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> ReqwestTransport {
        let config = ApiConfig {
            base_url: "http://localhost:8000/".to_string(),
            timeout_secs: 5,
        };
        ReqwestTransport::new(&config).unwrap()
    }

    #[test]
    fn url_joins_base_and_path_without_double_slash() {
        assert_eq!(
            transport().url("/api/timeline/all"),
            "http://localhost:8000/api/timeline/all"
        );
    }

    #[test]
    fn transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }
}
