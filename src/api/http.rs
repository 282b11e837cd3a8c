//! Shared HTTP plumbing for the provider clients.

use crate::error::{AppError, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

/// Builds a client whose every request is bounded by `timeout`.
pub(crate) fn client_with_timeout(timeout: Duration) -> Result<Client> {
    Client::builder().timeout(timeout).build().map_err(|e| {
        error!("Failed to build HTTP client: {}", e);
        AppError::Api(e.into())
    })
}

/// Sends `request`, requires a success status and decodes the JSON body.
///
/// URLs are stripped from transport errors since they carry API keys in the query.
pub(crate) async fn get_json<T: DeserializeOwned>(request: RequestBuilder, provider: &str) -> Result<T> {
    let response = request.send().await.map_err(|e| {
        let e = e.without_url();
        error!("{} request failed: {}", provider, e);
        AppError::Api(e.into())
    })?;

    // Check HTTP status code and handle potential API errors
    let status = response.status();
    let response = response.error_for_status().map_err(|e| {
        error!("{} responded with status {}", provider, status);
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            error!("Received 401/403 from {}. Check the configured API key.", provider);
        }
        AppError::Api(e.without_url().into())
    })?;

    let body = response.text().await.map_err(|e| {
        error!("Failed to read {} response body: {}", provider, e);
        AppError::Api(e.without_url().into())
    })?;
    debug!("{} returned {} bytes", provider, body.len());

    serde_json::from_str(&body).map_err(|e| {
        error!("Error parsing {} response JSON: {}", provider, e);
        AppError::from(e)
    })
}
