use thiserror::Error;

/// The main error type for the fixerio crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error: bad environment values, a key-based gateway
  /// without an access key, or an operation the gateway does not serve
  #[error("configuration error: {0}")]
  Config(String),

  /// A failed exchange with the API. Every transport-level failure ends up
  /// here: non-2xx status, connection refused, DNS failure, timeout expiry.
  #[error("{message}")]
  ApiRequest {
    /// HTTP status code, when the failure was a status error
    status: Option<u16>,
    /// URL of the failed request, when one was built
    url: Option<String>,
    /// Human-readable message; status failures keep the transport
    /// library's classic phrasing
    message: String,
  },

  /// Decode failure of a successful response body
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

/// Result type alias for the fixerio crates
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
  /// Status failure in the classic `requests` phrasing:
  /// `"<code> Client Error: <reason> for url: <url>"`. Integrations that
  /// pattern-match on this string keep working.
  pub fn http_status(status: u16, reason: &str, url: &str) -> Self {
    let kind = if (400..500).contains(&status) { "Client Error" } else { "Server Error" };
    Error::ApiRequest {
      status: Some(status),
      url: Some(url.to_string()),
      message: format!("{status} {kind}: {reason} for url: {url}"),
    }
  }

  /// Transport failure that never produced an HTTP status.
  pub fn transport(url: Option<String>, message: impl Into<String>) -> Self {
    Error::ApiRequest { status: None, url, message: message.into() }
  }
}
