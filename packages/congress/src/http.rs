//! HTTP helpers for talking to the Congress.gov API.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{CongressError, Result};

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("lawchat-congress/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// The timeout applies to each request individually.
pub fn create_client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// GET a URL with the API key attached and decode the JSON body.
///
/// The key is appended as an `api_key` query parameter, so `url` may
/// already carry its own query string. Non-success statuses are returned
/// as [`CongressError::Http`]; a body that is not valid JSON for `T` is
/// returned as [`CongressError::Decode`].
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to fetch (without the key)
/// * `api_key` - Congress.gov API key
/// * `context` - Short description used in decode errors
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    api_key: &str,
    context: &str,
) -> Result<T> {
    tracing::debug!(url, "GET");

    // Errors carry the request URL, which includes the key.
    let response = client
        .get(url)
        .query(&[("api_key", api_key)])
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| CongressError::Http(e.without_url()))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| CongressError::Http(e.without_url()))?;
    serde_json::from_slice(&bytes).map_err(|e| CongressError::Decode {
        context: context.to_string(),
        message: e.to_string(),
    })
}
