//! Events API Client
//!
//! HTTP client for the Fullstack Events REST API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::dto::{Envelope, Event, Guest, Rsvp};

/// Events REST API client
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
}

/// Configuration for the events API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the API (e.g., "https://fsa-crud-2aa9294fe819.herokuapp.com/api")
    pub base_url: String,
    /// Cohort path segment (e.g., "/2507")
    pub cohort: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fsa-crud-2aa9294fe819.herokuapp.com/api".to_string(),
            cohort: "/2507".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

impl ApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: ApiClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Build a full resource URL under the configured cohort
    fn url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.cohort,
            path
        )
    }

    /// Fetch the full event collection
    pub async fn fetch_events(&self) -> Result<Vec<Event>, ClientError> {
        self.get_json(&self.url("/events")).await
    }

    /// Fetch a single event by id
    pub async fn fetch_event(&self, id: i64) -> Result<Event, ClientError> {
        self.get_json(&self.url(&format!("/events/{}", id))).await
    }

    /// Fetch the full guest collection
    pub async fn fetch_guests(&self) -> Result<Vec<Guest>, ClientError> {
        self.get_json(&self.url("/guests")).await
    }

    /// Fetch the full RSVP collection
    pub async fn fetch_rsvps(&self) -> Result<Vec<Rsvp>, ClientError> {
        self.get_json(&self.url("/rsvps")).await
    }

    /// GET a resource and unwrap its `{ "data": ... }` envelope
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout
            } else if e.is_connect() {
                ClientError::Unavailable
            } else {
                ClientError::Request(e)
            }
        })?;

        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status().as_u16(),
            });
        }

        let envelope: Envelope<T> = response.json().await.map_err(ClientError::Request)?;
        Ok(envelope.data)
    }
}

/// Errors that can occur when talking to the events API
///
/// Transport failure, non-2xx status, and malformed bodies are distinct
/// variants here; collapsing them into one handling path is the state
/// layer's policy, not the client's.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("events API unavailable")]
    Unavailable,

    #[error("request timeout")]
    Timeout,

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiClientConfig::default();
        assert_eq!(
            config.base_url,
            "https://fsa-crud-2aa9294fe819.herokuapp.com/api"
        );
        assert_eq!(config.cohort, "/2507");
    }

    #[test]
    fn test_url_building() {
        let client = ApiClient::new(ApiClientConfig {
            base_url: "http://localhost:8082/api/".to_string(),
            cohort: "/2507".to_string(),
            request_timeout_ms: 1000,
        })
        .unwrap();

        assert_eq!(client.url("/events"), "http://localhost:8082/api/2507/events");
        assert_eq!(
            client.url("/events/3"),
            "http://localhost:8082/api/2507/events/3"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ClientError::Status { status: 500 };
        assert_eq!(err.to_string(), "HTTP 500");

        let err = ClientError::Timeout;
        assert_eq!(err.to_string(), "request timeout");
    }
}
