//! Bearer-authenticated GET client for the EmptyArray API.

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::debug;

use emptyarray_core::{defaults, Error, RemoteApi, Result};

/// Configuration for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL the endpoint paths are appended to.
    pub base_url: String,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_seconds: Option<u64>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_string(),
            timeout_seconds: None,
            user_agent: format!("emptyarray-sync/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// `reqwest`-backed [`RemoteApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        debug!(
            component = "client",
            base_url = %config.base_url,
            timeout_seconds = ?config.timeout_seconds,
            "Initialized EmptyArray API client"
        );

        Ok(Self { client, config })
    }

    /// Create a client for the production API.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ApiClientConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }
}

#[async_trait]
impl RemoteApi for ApiClient {
    async fn get(&self, endpoint: &str, access_token: &str) -> Result<String> {
        let url = self.url(endpoint);
        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(
                component = "client",
                endpoint,
                status = status.as_u16(),
                "EmptyArray API returned an error status"
            );
            return Err(Error::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(
            component = "client",
            endpoint,
            status = status.as_u16(),
            body_len = body.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Fetched"
        );
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_production() {
        let config = ApiClientConfig::default();
        assert_eq!(config.base_url, "https://api.emptyarray.co");
        assert!(config.timeout_seconds.is_none());
        assert!(config.user_agent.starts_with("emptyarray-sync/"));
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new(ApiClientConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..ApiClientConfig::default()
        })
        .unwrap();
        assert_eq!(client.url("/v1/inbox"), "http://localhost:8080/v1/inbox");
    }
}
