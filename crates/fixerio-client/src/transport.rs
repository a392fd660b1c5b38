//! HTTP transport layer for Fixer API requests

use fixerio_core::{Config, Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::options::{Payload, ResolvedOptions};

/// HTTP transport for the Fixer API.
///
/// Builds the request URL for a path segment and resolved options, attaches
/// the access key where the gateway expects it, and translates every
/// transport-level failure into [`Error::ApiRequest`] at this boundary.
pub(crate) struct Transport {
  client: Client,
  config: Config,
}

impl Transport {
  /// Create a transport over a fresh HTTP client.
  pub fn new(config: Config) -> Result<Self> {
    config.validate()?;
    let client = Client::builder()
      .user_agent(concat!("fixerio-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::transport(None, format!("failed to create HTTP client: {e}")))?;

    Ok(Self { client, config })
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Full request URL for a path segment and query payload.
  ///
  /// The root comes from the override when set, otherwise from the gateway
  /// and the effective secure flag. No `?` is emitted when there is nothing
  /// to put after it.
  fn endpoint_url(&self, path: &str, payload: &Payload, secure: bool) -> Result<Url> {
    let root = self
      .config
      .url_override
      .as_deref()
      .unwrap_or_else(|| self.config.gateway.root(secure));

    let mut url = Url::parse(&format!("{}/{}", root.trim_end_matches('/'), path))
      .map_err(|e| Error::Config(format!("invalid endpoint root: {e}")))?;

    let key_in_query = self.config.gateway.key_in_query() && self.config.access_key.is_some();
    if !payload.is_empty() || key_in_query {
      let mut pairs = url.query_pairs_mut();
      if key_in_query {
        if let Some(access_key) = &self.config.access_key {
          pairs.append_pair("access_key", access_key);
        }
      }
      for (name, value) in payload {
        pairs.append_pair(name, value);
      }
    }

    Ok(url)
  }

  /// Issue a GET for a path segment with the resolved options and decode
  /// the body.
  #[instrument(skip(self, opts), fields(path = %path))]
  pub async fn get<T>(&self, path: &str, opts: &ResolvedOptions) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let payload = opts.payload(self.config.gateway);
    let url = self.endpoint_url(path, &payload, opts.secure)?;
    debug!("requesting {url}");

    let mut request = self.client.get(url.clone());
    if self.config.gateway.requires_access_key() && !self.config.gateway.key_in_query() {
      if let Some(access_key) = &self.config.access_key {
        request = request.header("apikey", access_key);
      }
    }
    if let Some(timeout) = opts.timeout {
      request = request.timeout(timeout);
    }

    let response = request
      .send()
      .await
      .map_err(|e| Error::transport(Some(url.to_string()), e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      return Err(Error::http_status(
        status.as_u16(),
        status.canonical_reason().unwrap_or(""),
        url.as_str(),
      ));
    }

    let body = response
      .text()
      .await
      .map_err(|e| Error::transport(Some(url.to_string()), e.to_string()))?;

    Ok(serde_json::from_str(&body)?)
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport").field("gateway", &self.config.gateway).finish()
  }
}
