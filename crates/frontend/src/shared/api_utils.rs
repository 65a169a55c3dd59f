//! API utilities for dashboard-backend communication
//!
//! The API base is an explicit [`ApiConfig`] value provided through Leptos
//! context, so several views (or tests) can target different backends.

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Base used when no build-time override is supplied.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Collection and action paths relative to the API base.
pub mod endpoints {
    pub const SNAPSHOT: &str = "snapshot/";
    pub const BOT_EVENTS: &str = "bot-events/";
    pub const AGGREGATE_IPS: &str = "aggregate-ips/";
    pub const AGGREGATE_PATHS: &str = "aggregate-paths/";
    pub const ATTACKS: &str = "attacks/";
    pub const SUBMISSIONS: &str = "submissions/";
    pub const SUBMISSIONS_EXPORT: &str = "submissions/export/";
    pub const CONTACT_BOT: &str = "contact-bot/";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `BOT_ANALYTICS_API_BASE` at compile time, falling back to [`DEFAULT_API_BASE`].
    pub fn from_build_env() -> Self {
        Self::new(option_env!("BOT_ANALYTICS_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full API URL from a relative path
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = config.endpoint(endpoints::BOT_EVENTS); // ".../api/bot-events/"
    /// ```
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Config provided by the application root, or the build default outside of it.
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_build_env)
}

/// Failure of one HTTP round trip. None of these are fatal to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Unable to load data from {url} ({status} {status_text})")]
    Http {
        url: String,
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

fn with_headers(mut request: RequestBuilder, headers: &[(&str, String)]) -> RequestBuilder {
    for (name, value) in headers {
        request = request.header(name, value);
    }
    request
}

async fn ensure_ok(url: &str, response: Response) -> Result<Response, FetchError> {
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(FetchError::Http {
        url: url.to_string(),
        status: response.status(),
        status_text: response.status_text(),
        body,
    })
}

/// GET `url` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    headers: &[(&str, String)],
) -> Result<T, FetchError> {
    log::debug!("GET {}", url);
    let response = with_headers(Request::get(url), headers)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let response = ensure_ok(url, response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// GET `url` and return the raw body (CSV exports).
pub async fn get_text(url: &str, headers: &[(&str, String)]) -> Result<String, FetchError> {
    log::debug!("GET {}", url);
    let response = with_headers(Request::get(url), headers)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let response = ensure_ok(url, response).await?;
    response
        .text()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// POST an already-encoded `application/x-www-form-urlencoded` body.
pub async fn post_form(url: &str, body: String) -> Result<(), FetchError> {
    log::debug!("POST {}", url);
    let response = Request::post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    ensure_ok(url, response).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_with_single_slash() {
        let config = ApiConfig::new("http://api.test/api/");
        assert_eq!(config.base_url(), "http://api.test/api");
        assert_eq!(config.endpoint("bot-events/"), "http://api.test/api/bot-events/");
        assert_eq!(config.endpoint("/snapshot/"), "http://api.test/api/snapshot/");
    }

    #[test]
    fn http_error_message_carries_status_text() {
        let err = FetchError::Http {
            url: "http://api.test/api/attacks/".into(),
            status: 503,
            status_text: "Service Unavailable".into(),
            body: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to load data from http://api.test/api/attacks/ (503 Service Unavailable)"
        );
        assert!(!err.is_unauthorized());
        assert!(FetchError::Http {
            url: String::new(),
            status: 403,
            status_text: String::new(),
            body: String::new(),
        }
        .is_unauthorized());
        assert_eq!(FetchError::Network("offline".into()).status(), None);
    }
}
