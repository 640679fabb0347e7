//! Reqwest-backed forwarding of `/api/*` requests to the customer API.
//!
//! The page host only relays: status, content headers and body travel back
//! unchanged so the browser sees exactly what the API answered.

use reqwest::{Client, Url, header};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid upstream url {0:?}")]
    InvalidUrl(String),

    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Response relayed back to the browser.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub body: Vec<u8>,
}

/// Client of the upstream customer API.
#[derive(Clone, Debug)]
pub struct UpstreamApi {
    client: Client,
    base_url: String,
}

impl UpstreamApi {
    /// Builds a forwarder for `base_url` (scheme and host, optionally a path prefix).
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` is not an absolute URL or the client
    /// cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, UpstreamError> {
        let parsed =
            Url::parse(base_url).map_err(|_| UpstreamError::InvalidUrl(base_url.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Upstream URL for a request path such as `/api/customer/123/`.
    pub fn url_for(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        }
    }

    /// Issues `GET` for `path` and buffers the whole answer.
    pub async fn forward(&self, path: &str, query: &str) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.url_for(path, query);
        log::debug!("Forwarding GET {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let content_type = header_value(response.headers(), header::CONTENT_TYPE);
        let content_disposition = header_value(response.headers(), header::CONTENT_DISPOSITION);
        let body = response.bytes().await?.to_vec();

        Ok(UpstreamResponse {
            status,
            content_type,
            content_disposition,
            body,
        })
    }
}

fn header_value(headers: &header::HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
