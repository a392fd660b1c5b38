//! Request-side value types shared by the client operations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Target currency codes for a rates request.
///
/// The API takes a single comma-separated `symbols` parameter; callers can
/// hand over either one code or a sequence. A sequence keeps its order and
/// any duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbols {
  /// A single currency code, passed through verbatim
  One(String),
  /// An ordered sequence of currency codes, comma-joined
  Many(Vec<String>),
}

impl Symbols {
  /// Query-string form of the symbols.
  ///
  /// An empty sequence yields `None` and behaves exactly like not
  /// providing symbols at all.
  pub fn as_query_value(&self) -> Option<String> {
    match self {
      Symbols::One(code) => Some(code.clone()),
      Symbols::Many(codes) if codes.is_empty() => None,
      Symbols::Many(codes) => Some(codes.join(",")),
    }
  }
}

impl From<&str> for Symbols {
  fn from(code: &str) -> Self {
    Symbols::One(code.to_string())
  }
}

impl From<String> for Symbols {
  fn from(code: String) -> Self {
    Symbols::One(code)
  }
}

impl From<Vec<String>> for Symbols {
  fn from(codes: Vec<String>) -> Self {
    Symbols::Many(codes)
  }
}

impl From<Vec<&str>> for Symbols {
  fn from(codes: Vec<&str>) -> Self {
    Symbols::Many(codes.into_iter().map(str::to_string).collect())
  }
}

impl<const N: usize> From<[&str; N]> for Symbols {
  fn from(codes: [&str; N]) -> Self {
    Symbols::Many(codes.iter().map(|c| c.to_string()).collect())
  }
}

/// A day to fetch historical rates for.
///
/// Accepts either a calendar date or a raw `YYYY-MM-DD` string. Strings are
/// not validated; a malformed one is forwarded to the API unchanged and any
/// failure comes back as an API error rather than a local one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoricalDate {
  /// A calendar date, rendered as ISO-8601
  Day(NaiveDate),
  /// A pre-formatted date string, used verbatim
  Iso(String),
}

impl HistoricalDate {
  /// The URL path segment for this date.
  pub fn into_path_segment(self) -> String {
    match self {
      HistoricalDate::Day(day) => day.format("%Y-%m-%d").to_string(),
      HistoricalDate::Iso(raw) => raw,
    }
  }
}

impl From<NaiveDate> for HistoricalDate {
  fn from(day: NaiveDate) -> Self {
    HistoricalDate::Day(day)
  }
}

impl From<&str> for HistoricalDate {
  fn from(raw: &str) -> Self {
    HistoricalDate::Iso(raw.to_string())
  }
}

impl From<String> for HistoricalDate {
  fn from(raw: String) -> Self {
    HistoricalDate::Iso(raw)
  }
}
