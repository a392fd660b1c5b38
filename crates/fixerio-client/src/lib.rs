//! # fixerio-client
//!
//! A client for the Fixer foreign-exchange-rate API.
//!
//! The client holds a set of defaults (gateway, access key, quote base,
//! target symbols, secure flag, timeout) and exposes three read-only
//! operations: latest rates, historical rates for a day, and the supported
//! currency listing. Per-call options override the defaults field by field;
//! responses are returned as decoded JSON, untouched.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fixerio_client::{Config, FixerioClient, RequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::anonymous().symbols(["USD", "GBP"]);
//!     let client = FixerioClient::new(config)?;
//!
//!     // Latest rates with the configured defaults
//!     let latest = client.latest().await?;
//!     println!("{}", latest["rates"]);
//!
//!     // Historical rates for a day, overriding the base
//!     let opts = RequestOptions::new().base("USD");
//!     let day = client.historical_rates_with("2000-01-03", opts).await?;
//!     println!("{}", day["rates"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every transport-level failure (non-2xx status, connection failure,
//! timeout expiry) surfaces as [`Error::ApiRequest`]; status failures keep
//! the classic `"<code> Client Error: <reason> for url: <url>"` message.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod options;
mod transport;

// Re-export the main client and common types
pub use client::FixerioClient;
pub use options::RequestOptions;

pub use fixerio_core::{Config, Error, Gateway, HistoricalDate, Result, Symbols};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::with_access_key("test-access-key");
    assert_eq!(config.access_key.as_deref(), Some("test-access-key"));
    let _client = FixerioClient::new(config).expect("failed to create client");
  }
}
