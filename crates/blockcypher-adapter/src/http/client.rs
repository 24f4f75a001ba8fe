/*
[INPUT]:  HTTP configuration (network, base URL, timeouts, API token)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{BlockcypherError, Result};
use crate::types::Network;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// API root; the network's `{coin}/{chain}` is appended to it
pub const API_ROOT_URL: &str = "https://api.blockcypher.com/v1";

/// Query parameter carrying the API token
const TOKEN_QUERY_PARAM: &str = "token";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub network: Network,
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            network: Network::default(),
            token: None,
        }
    }
}

/// Main HTTP client for the BlockCypher API
#[derive(Debug, Clone)]
pub struct BlockcypherClient {
    http_client: Client,
    base_url: Url,
    token: Option<String>,
}

impl BlockcypherClient {
    /// Create a new client for `btc/main` without a token
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client addressing `config.network` on the public API
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = format!("{API_ROOT_URL}/{}", config.network);
        Self::with_config_and_base_url(config, &base_url)
    }

    /// Create a new client against an explicit base URL.
    ///
    /// The base URL already names the network (e.g.
    /// `https://api.blockcypher.com/v1/btc/test3`), so `config.network` is
    /// not consulted.
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            return Err(BlockcypherError::Config(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            token: config.token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build full URL for an endpoint; each segment is percent-encoded
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                BlockcypherError::Config(format!(
                    "base URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build request builder for an endpoint, token attached
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let mut url = self.endpoint_url(segments)?;
        if let Some(token) = &self.token {
            url.query_pairs_mut().append_pair(TOKEN_QUERY_PARAM, token);
        }
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode the JSON body.
    ///
    /// Non-2xx responses become `BlockcypherError::Api` with the raw body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build()?;
        let method = request.method().clone();
        // path only, the query may hold the token
        let path = request.url().path().to_string();
        debug!(%method, %path, "sending request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            warn!(%method, %path, status = status.as_u16(), "request failed");
            return Err(BlockcypherError::api_error(
                status,
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }

        debug!(%method, %path, status = status.as_u16(), bytes = body.len(), "request succeeded");
        Ok(serde_json::from_slice(&body)?)
    }
}
