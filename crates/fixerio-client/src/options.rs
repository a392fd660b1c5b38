//! Per-call option resolution and query payload construction

use std::time::Duration;

use fixerio_core::{Config, Gateway, Symbols};

/// Query pairs for one request, in insertion order.
pub(crate) type Payload = Vec<(&'static str, String)>;

/// Per-call overrides for a single request.
///
/// Every field is optional; `None` falls back to the client [`Config`].
///
/// # Examples
///
/// ```rust
/// use fixerio_client::RequestOptions;
/// use std::time::Duration;
///
/// let opts = RequestOptions::new()
///     .base("USD")
///     .symbols(["GBP", "JPY"])
///     .timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
  /// Currency to quote rates against
  pub base: Option<String>,
  /// Target currency codes
  pub symbols: Option<Symbols>,
  /// Route this call to the HTTPS root
  pub secure: Option<bool>,
  /// Bound for this single call
  pub timeout: Option<Duration>,
}

impl RequestOptions {
  /// Empty options: every field falls back to the client default.
  pub fn new() -> Self {
    Self::default()
  }

  /// Quote rates against this base for this call.
  pub fn base(mut self, base: impl Into<String>) -> Self {
    self.base = Some(base.into());
    self
  }

  /// Request these target symbols for this call.
  pub fn symbols(mut self, symbols: impl Into<Symbols>) -> Self {
    self.symbols = Some(symbols.into());
    self
  }

  /// Route this call to the HTTPS root.
  pub fn secure(mut self, secure: bool) -> Self {
    self.secure = Some(secure);
    self
  }

  /// Bound this call to the given duration.
  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Resolve against the client defaults: call argument first, then the
  /// configured default, then absent.
  ///
  /// The secure flag resolves by boolean OR; a client constructed secure
  /// cannot be downgraded back to plain HTTP by a call-time flag.
  pub(crate) fn resolve(self, config: &Config) -> ResolvedOptions {
    ResolvedOptions {
      base: self.base.or_else(|| config.base.clone()),
      symbols: self.symbols.or_else(|| config.symbols.clone()),
      secure: self.secure.unwrap_or(false) || config.secure,
      timeout: self.timeout.or(config.timeout),
    }
  }
}

/// Effective values for one request, after the override chain.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedOptions {
  pub base: Option<String>,
  pub symbols: Option<Symbols>,
  pub secure: bool,
  pub timeout: Option<Duration>,
}

impl ResolvedOptions {
  /// Effective values for an endpoint without currency filters: only the
  /// configured secure flag and timeout apply.
  pub fn bare(config: &Config) -> Self {
    ResolvedOptions { base: None, symbols: None, secure: config.secure, timeout: config.timeout }
  }

  /// Query pairs for this request.
  ///
  /// A key appears only when its value resolved non-null, and the gateway
  /// decides whether a `base` parameter exists at all (the key-based
  /// deployments pin the base to the account).
  pub fn payload(&self, gateway: Gateway) -> Payload {
    let mut payload = Payload::new();
    if gateway.supports_base() {
      if let Some(base) = &self.base {
        payload.push(("base", base.clone()));
      }
    }
    if let Some(symbols) = self.symbols.as_ref().and_then(Symbols::as_query_value) {
      payload.push(("symbols", symbols));
    }
    payload
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_call_arguments_override_config_defaults() {
    let config = Config::anonymous()
      .base("USD")
      .symbols(["JPY", "EUR"])
      .timeout(Duration::from_secs(30));

    let resolved = RequestOptions::new()
      .base("GBP")
      .symbols(["USD", "GBP"])
      .timeout(Duration::from_secs(5))
      .resolve(&config);

    assert_eq!(resolved.base.as_deref(), Some("GBP"));
    assert_eq!(resolved.symbols.unwrap().as_query_value().as_deref(), Some("USD,GBP"));
    assert_eq!(resolved.timeout, Some(Duration::from_secs(5)));
  }

  #[test]
  fn test_config_defaults_apply_when_call_is_silent() {
    let config = Config::anonymous().base("USD").timeout(Duration::from_secs(30));

    let resolved = RequestOptions::new().resolve(&config);

    assert_eq!(resolved.base.as_deref(), Some("USD"));
    assert_eq!(resolved.timeout, Some(Duration::from_secs(30)));
    assert!(resolved.symbols.is_none());
  }

  #[test]
  fn test_secure_resolves_by_boolean_or() {
    let insecure = Config::anonymous();
    let secure = Config::anonymous().secure(true);

    assert!(RequestOptions::new().secure(true).resolve(&insecure).secure);
    assert!(RequestOptions::new().resolve(&secure).secure);
    // a call-time false never downgrades a secure client
    assert!(RequestOptions::new().secure(false).resolve(&secure).secure);
    assert!(!RequestOptions::new().resolve(&insecure).secure);
  }

  #[test]
  fn test_payload_includes_base_only_when_resolved() {
    let config = Config::anonymous();
    let resolved = RequestOptions::new().base("USD").resolve(&config);
    assert_eq!(resolved.payload(Gateway::Fixer), vec![("base", "USD".to_string())]);

    let empty = RequestOptions::new().resolve(&config);
    assert!(empty.payload(Gateway::Fixer).is_empty());
  }

  #[test]
  fn test_key_gateways_drop_the_base_parameter() {
    let config = Config::with_access_key("test-access-key").base("USD");
    let resolved = RequestOptions::new().resolve(&config);
    assert!(resolved.payload(Gateway::DataFixer).is_empty());
    assert!(resolved.payload(Gateway::ApiLayer).is_empty());
  }

  #[test]
  fn test_payload_joins_symbols_and_skips_empty() {
    let config = Config::anonymous();

    let many = RequestOptions::new().symbols(["USD", "GBP"]).resolve(&config);
    assert_eq!(many.payload(Gateway::Fixer), vec![("symbols", "USD,GBP".to_string())]);

    let single = RequestOptions::new().symbols("CHF").resolve(&config);
    assert_eq!(single.payload(Gateway::Fixer), vec![("symbols", "CHF".to_string())]);

    let empty = RequestOptions::new().symbols(Symbols::Many(vec![])).resolve(&config);
    assert!(empty.payload(Gateway::Fixer).is_empty());
  }
}
