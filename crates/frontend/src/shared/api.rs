//! HTTP client helpers for talking to the banquet-hall REST API.
//!
//! Every request attaches `Authorization: Bearer <access>` when a token is
//! present in browser storage. Failures are surfaced per-request as an
//! [`ApiError`]; there are no retries and no transient/permanent distinction.

use contracts::shared::errors::ErrorPayload;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::auth::storage;

/// Name of the optional JS global that overrides the API origin, for
/// deployments where the API is not served from the site host.
const BASE_OVERRIDE_GLOBAL: &str = "__HALL_API_BASE";

/// Base URL for API requests, e.g. `http://localhost:8000/api`.
///
/// Uses the `__HALL_API_BASE` global when the hosting page sets one,
/// otherwise derives it from the current window location with the backend's
/// default port 8000.
pub fn api_base() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(value) = js_sys::Reflect::get(&window, &BASE_OVERRIDE_GLOBAL.into()) {
            if let Some(base) = value.as_string() {
                return base.trim_end_matches('/').to_string();
            }
        }
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        return format!("{}//{}:8000/api", protocol, hostname);
    }
    String::new()
}

/// Build a full API URL from a path like `/bookings/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// One failed request: the HTTP status (if the request got that far) and the
/// parsed error body. Network and validation failures render identically
/// unless the backend differentiates via the payload shape.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: Option<u16>,
    pub payload: ErrorPayload,
}

impl ApiError {
    fn network(detail: impl ToString) -> Self {
        Self {
            status: None,
            payload: ErrorPayload::Raw(detail.to_string()),
        }
    }

    pub fn message(&self) -> String {
        self.payload.message()
    }
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read_error(resp: Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError {
        status: Some(status),
        payload: ErrorPayload::from_body(&body),
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::network(format!("Failed to read response: {e}")))?;
    serde_json::from_str(&text)
        .map_err(|e| ApiError::network(format!("Failed to parse response: {e}")))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = with_auth(Request::get(&api_url(path)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Request failed: {e}")))?;
    decode(resp).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = with_auth(Request::post(&api_url(path)))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::network(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Request failed: {e}")))?;
    decode(resp).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = with_auth(Request::put(&api_url(path)))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::network(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Request failed: {e}")))?;
    decode(resp).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = with_auth(Request::patch(&api_url(path)))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::network(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Request failed: {e}")))?;
    decode(resp).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let resp = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Request failed: {e}")))?;
    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    Ok(())
}

/// Fetch a text resource (CSV exports) with the bearer token attached.
pub async fn get_text(path: &str) -> Result<String, ApiError> {
    let resp = with_auth(Request::get(&api_url(path)))
        .header("Accept", "text/csv")
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Request failed: {e}")))?;
    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    resp.text()
        .await
        .map_err(|e| ApiError::network(format!("Failed to read response: {e}")))
}
