pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{HistoricalDate, Symbols};

use serde::{Deserialize, Serialize};

/// The historical Fixer API deployments.
///
/// Each value of this enum is one deployment the API went through over its
/// lifetime. A client targets exactly one of them; they are never mixed
/// within a single configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gateway {
  /// The original anonymous `api.fixer.io` service. No authentication,
  /// per-request `base` parameter, no `symbols` endpoint.
  Fixer,

  /// The `data.fixer.io/api` gateway. Authenticates with an `access_key`
  /// query parameter; the quote base is fixed at account level.
  DataFixer,

  /// The `api.apilayer.com/fixer` gateway. HTTPS only, authenticates with
  /// an `apikey` header; the quote base is fixed at account level.
  ApiLayer,
}

impl Gateway {
  /// Endpoint root for this gateway.
  ///
  /// `secure` selects the HTTPS variant where one exists; `ApiLayer` has no
  /// plain-HTTP root, so the flag is ignored there.
  pub fn root(&self, secure: bool) -> &'static str {
    match (self, secure) {
      (Gateway::Fixer, false) => FIXER_URL,
      (Gateway::Fixer, true) => FIXER_SECURE_URL,
      (Gateway::DataFixer, false) => DATA_FIXER_URL,
      (Gateway::DataFixer, true) => DATA_FIXER_SECURE_URL,
      (Gateway::ApiLayer, _) => APILAYER_URL,
    }
  }

  /// Whether requests must carry an access key.
  pub fn requires_access_key(&self) -> bool {
    !matches!(self, Gateway::Fixer)
  }

  /// Whether the access key travels in the query string (`access_key=`)
  /// rather than in an `apikey` header.
  pub fn key_in_query(&self) -> bool {
    matches!(self, Gateway::DataFixer)
  }

  /// Whether the gateway accepts a per-request `base` parameter. The
  /// key-based gateways pin the quote base to the account instead.
  pub fn supports_base(&self) -> bool {
    matches!(self, Gateway::Fixer)
  }

  /// Whether the gateway serves the `symbols` currency listing.
  pub fn supports_symbols(&self) -> bool {
    self.requires_access_key()
  }

  /// Parse a gateway name as used in `FIXERIO_GATEWAY`.
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "fixer" => Some(Gateway::Fixer),
      "data" => Some(Gateway::DataFixer),
      "apilayer" => Some(Gateway::ApiLayer),
      _ => None,
    }
  }
}

impl std::fmt::Display for Gateway {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Gateway::Fixer => write!(f, "fixer"),
      Gateway::DataFixer => write!(f, "data"),
      Gateway::ApiLayer => write!(f, "apilayer"),
    }
  }
}

/// Anonymous `api.fixer.io` roots
pub const FIXER_URL: &str = "http://api.fixer.io";
pub const FIXER_SECURE_URL: &str = "https://api.fixer.io";

/// `data.fixer.io` gateway roots
pub const DATA_FIXER_URL: &str = "http://data.fixer.io/api";
pub const DATA_FIXER_SECURE_URL: &str = "https://data.fixer.io/api";

/// `api.apilayer.com` gateway root (HTTPS only)
pub const APILAYER_URL: &str = "https://api.apilayer.com/fixer";

/// Quote base the API falls back to when none is requested.
pub const DEFAULT_BASE: &str = "EUR";

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_gateway_roots() {
    assert_eq!(Gateway::Fixer.root(false), "http://api.fixer.io");
    assert_eq!(Gateway::Fixer.root(true), "https://api.fixer.io");
    assert_eq!(Gateway::DataFixer.root(false), "http://data.fixer.io/api");
    assert_eq!(Gateway::DataFixer.root(true), "https://data.fixer.io/api");
  }

  #[test]
  fn test_apilayer_root_ignores_secure_flag() {
    assert_eq!(Gateway::ApiLayer.root(false), Gateway::ApiLayer.root(true));
    assert!(Gateway::ApiLayer.root(false).starts_with("https://"));
  }

  #[test]
  fn test_gateway_auth_placement() {
    assert!(!Gateway::Fixer.requires_access_key());
    assert!(Gateway::DataFixer.key_in_query());
    assert!(Gateway::ApiLayer.requires_access_key());
    assert!(!Gateway::ApiLayer.key_in_query());
  }

  #[test]
  fn test_gateway_from_str() {
    assert_eq!(Gateway::from_str("fixer"), Some(Gateway::Fixer));
    assert_eq!(Gateway::from_str("data"), Some(Gateway::DataFixer));
    assert_eq!(Gateway::from_str("apilayer"), Some(Gateway::ApiLayer));
    assert_eq!(Gateway::from_str("bogus"), None);
  }
}
