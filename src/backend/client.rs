//! HTTP client for the Badmintoner REST API
//!
//! All data the frontend shows comes from the REST API. Pre-auth
//! endpoints (login, signup, public profiles) are called with the
//! configured HTTP Basic service credentials; everything else carries
//! the visitor's session token as a Bearer header.

use crate::config::BackendConfig;
use crate::utils::error::{Result, WebError};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Credentials attached to a backend call
#[derive(Debug, Clone, Copy)]
pub enum BackendAuth<'a> {
    /// HTTP Basic with the configured service credentials
    Basic,
    /// Bearer with a visitor session token
    Bearer(&'a str),
}

/// Typed client over the Badmintoner REST API
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    basic_credentials: String,
}

impl BackendClient {
    /// Build a client from configuration
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            basic_credentials: config.basic_credentials(),
        })
    }

    /// Absolute URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorization(&self, auth: BackendAuth<'_>) -> String {
        match auth {
            BackendAuth::Basic => self.basic_credentials.clone(),
            BackendAuth::Bearer(token) => format!("Bearer {}", token),
        }
    }

    /// GET a JSON resource
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: BackendAuth<'_>,
    ) -> Result<T> {
        self.request_json(Method::GET, path, auth, None).await
    }

    /// Send an optional JSON body and decode the JSON response
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        auth: BackendAuth<'_>,
        body: Option<&Value>,
    ) -> Result<T> {
        let url = self.url(path);
        debug!(%method, %url, "backend request");

        let mut request = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, self.authorization(auth));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%url, %status, "backend rejected request");
            return Err(decode_error(status, &body));
        }

        Ok(response.json::<T>().await?)
    }
}

/// Turn a non-success backend response into a [`WebError`].
///
/// The API reports failures as a `message` string, a `message` array
/// (one entry per failed validation rule) or an `error` string.
/// Anything else collapses to a generic notice.
pub(crate) fn decode_error(status: StatusCode, body: &str) -> WebError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| extract_message(&value))
        .unwrap_or_else(|| "Something went wrong".to_string());

    WebError::Backend {
        status: status.as_u16(),
        message,
    }
}

fn extract_message(value: &Value) -> Option<String> {
    match value.get("message") {
        Some(Value::Array(parts)) => {
            let parts: Vec<&str> = parts.iter().filter_map(Value::as_str).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        Some(Value::String(message)) => Some(message.clone()),
        _ => value
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}
