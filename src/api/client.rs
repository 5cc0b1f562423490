//! HTTP client for the gearbox catalog endpoint

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;

/// Failure modes for a catalog fetch.
///
/// Payloads are plain strings so the error can travel inside a clonable UI
/// message. A body that fails normalization is NOT an error here; the
/// normalizer absorbs it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("no API endpoint configured - set one under Settings")]
    NoEndpoint,
    #[error("invalid endpoint URL: {0}")]
    BadEndpoint(String),
    #[error("request failed: {status}")]
    Transport { status: String },
    #[error("network error: {0}")]
    Network(String),
}

/// Client for the Gearbox Catalog API
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CatalogClient {
    /// Build a client for the configured endpoint. An optional credential is
    /// forwarded as the `x-api-key` header on every request, never as a
    /// query value.
    pub fn new(endpoint: &str, api_key: Option<&str>) -> Result<Self, FetchError> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(FetchError::NoEndpoint);
        }

        Ok(Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
            api_key: api_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
        })
    }

    /// Compose the request URL: the bare endpoint when there are no
    /// parameters, otherwise the endpoint plus an encoded query string.
    pub fn request_url(&self, pairs: &[(&'static str, String)]) -> Result<Url, FetchError> {
        let url = if pairs.is_empty() {
            Url::parse(&self.endpoint)
        } else {
            Url::parse_with_params(&self.endpoint, pairs)
        };
        url.map_err(|e| FetchError::BadEndpoint(e.to_string()))
    }

    /// Perform one GET against the catalog. Any non-2xx outcome surfaces as
    /// a uniform transport failure carrying the status line; no retry.
    pub async fn fetch(&self, pairs: &[(&'static str, String)]) -> Result<Value, FetchError> {
        let url = self.request_url(pairs)?;
        tracing::info!("GET {}", url);

        let mut request = self.client.get(url).header(CONTENT_TYPE, "application/json");
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("catalog fetch failed: {}", status);
            return Err(FetchError::Transport {
                status: status.to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_endpoint_is_rejected() {
        assert_eq!(
            CatalogClient::new("   ", None).unwrap_err(),
            FetchError::NoEndpoint
        );
    }

    #[test]
    fn test_bare_endpoint_without_params() {
        let client = CatalogClient::new("https://api.example.com/Prod/gearboxes", None).unwrap();
        let url = client.request_url(&[]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/Prod/gearboxes");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_query_string_composition() {
        let client = CatalogClient::new("https://api.example.com/Prod/gearboxes", None).unwrap();
        let url = client
            .request_url(&[
                ("category", "automotive".to_string()),
                ("min_torque", "3000".to_string()),
            ])
            .unwrap();
        assert_eq!(url.query(), Some("category=automotive&min_torque=3000"));
    }

    #[test]
    fn test_query_values_are_encoded() {
        let client = CatalogClient::new("https://api.example.com/gearboxes", None).unwrap();
        let url = client
            .request_url(&[("manufacturer", "Bosch & Co".to_string())])
            .unwrap();
        assert_eq!(url.query(), Some("manufacturer=Bosch+%26+Co"));
    }

    #[test]
    fn test_invalid_endpoint_reports() {
        let client = CatalogClient::new("not a url", None).unwrap();
        assert!(matches!(
            client.request_url(&[]),
            Err(FetchError::BadEndpoint(_))
        ));
    }

    #[test]
    fn test_blank_api_key_is_dropped() {
        let client = CatalogClient::new("https://api.example.com", Some("  ")).unwrap();
        assert_eq!(client.api_key, None);
    }
}
