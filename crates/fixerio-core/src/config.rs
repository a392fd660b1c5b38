//! Configuration management for the Fixer client

use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Symbols;
use crate::{Gateway, DEFAULT_BASE};

/// Client-level defaults for the Fixer API.
///
/// Built once at client construction and never mutated by request calls;
/// per-call overrides are resolved against it without touching it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Access key for the key-based gateways; `None` on the anonymous one
  pub access_key: Option<String>,

  /// Default quote base. The API's own default (`EUR`) is stored as `None`
  /// so "was a base explicitly requested" stays a single `is_some()` check
  pub base: Option<String>,

  /// Default target currency codes
  pub symbols: Option<Symbols>,

  /// Route to the HTTPS root by default
  pub secure: bool,

  /// Default bound for each outbound call; `None` means unbounded
  pub timeout: Option<Duration>,

  /// The API deployment this client talks to
  pub gateway: Gateway,

  /// Replacement endpoint root, mainly for pointing tests at a mock server
  pub url_override: Option<String>,
}

impl Config {
  /// Configuration for the anonymous `api.fixer.io` deployment.
  pub fn anonymous() -> Self {
    Config {
      access_key: None,
      base: None,
      symbols: None,
      secure: false,
      timeout: None,
      gateway: Gateway::Fixer,
      url_override: None,
    }
  }

  /// Configuration for a key-based deployment, defaulting to the
  /// `data.fixer.io` gateway.
  pub fn with_access_key(access_key: impl Into<String>) -> Self {
    Config {
      access_key: Some(access_key.into()),
      gateway: Gateway::DataFixer,
      ..Config::anonymous()
    }
  }

  /// Load configuration from environment variables.
  ///
  /// Reads `FIXERIO_ACCESS_KEY`, `FIXERIO_GATEWAY` (`fixer` | `data` |
  /// `apilayer`), `FIXERIO_BASE`, `FIXERIO_SYMBOLS` (comma-separated),
  /// `FIXERIO_SECURE`, `FIXERIO_TIMEOUT_SECS` and `FIXERIO_URL`. When no
  /// gateway is named, the presence of an access key selects the
  /// `data.fixer.io` deployment over the anonymous one.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let access_key = env::var("FIXERIO_ACCESS_KEY").ok();

    let gateway = match env::var("FIXERIO_GATEWAY") {
      Ok(name) => Gateway::from_str(&name)
        .ok_or_else(|| Error::Config(format!("invalid FIXERIO_GATEWAY: {name}")))?,
      Err(_) if access_key.is_some() => Gateway::DataFixer,
      Err(_) => Gateway::Fixer,
    };

    let symbols = env::var("FIXERIO_SYMBOLS")
      .ok()
      .map(|list| Symbols::Many(list.split(',').map(str::to_string).collect()));

    let secure = match env::var("FIXERIO_SECURE") {
      Ok(value) => value.parse().map_err(|_| Error::Config("invalid FIXERIO_SECURE".to_string()))?,
      Err(_) => false,
    };

    let timeout = match env::var("FIXERIO_TIMEOUT_SECS") {
      Ok(value) => {
        let secs =
          value.parse().map_err(|_| Error::Config("invalid FIXERIO_TIMEOUT_SECS".to_string()))?;
        Some(Duration::from_secs(secs))
      }
      Err(_) => None,
    };

    let mut config = Config {
      access_key,
      base: None,
      symbols,
      secure,
      timeout,
      gateway,
      url_override: env::var("FIXERIO_URL").ok(),
    };
    if let Ok(base) = env::var("FIXERIO_BASE") {
      config = config.base(base);
    }
    Ok(config)
  }

  /// Set the default quote base.
  ///
  /// Passing the API's own default stores nothing, so request building can
  /// treat it like no base at all.
  pub fn base(mut self, base: impl Into<String>) -> Self {
    let base = base.into();
    self.base = (base != DEFAULT_BASE).then_some(base);
    self
  }

  /// Set the default target symbols. Stored as given, without validation.
  pub fn symbols(mut self, symbols: impl Into<Symbols>) -> Self {
    self.symbols = Some(symbols.into());
    self
  }

  /// Default to the HTTPS endpoint root.
  pub fn secure(mut self, secure: bool) -> Self {
    self.secure = secure;
    self
  }

  /// Set the default per-call timeout. Stored as given, without validation.
  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Target a specific API deployment.
  pub fn gateway(mut self, gateway: Gateway) -> Self {
    self.gateway = gateway;
    self
  }

  /// Replace the gateway root, e.g. with a mock server URL.
  pub fn url_override(mut self, url: impl Into<String>) -> Self {
    self.url_override = Some(url.into());
    self
  }

  /// Check the configuration is usable with its gateway.
  pub fn validate(&self) -> Result<()> {
    if self.gateway.requires_access_key() && self.access_key.is_none() {
      return Err(Error::Config(format!(
        "the {} gateway requires an access key",
        self.gateway
      )));
    }
    Ok(())
  }
}
