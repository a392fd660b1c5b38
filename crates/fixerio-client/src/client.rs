/*
 *
 *
 *
 *
 * MIT License
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The Fixer API client and its operations

use fixerio_core::{Config, Error, HistoricalDate, Result};
use serde_json::Value;

use crate::options::{RequestOptions, ResolvedOptions};
use crate::transport::Transport;

/// Main Fixer API client
///
/// Holds the default configuration and issues stateless read-only requests
/// against the configured gateway. The client never mutates its own state,
/// so one instance can be shared freely across tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use fixerio_client::{Config, FixerioClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = FixerioClient::new(Config::anonymous())?;
///
///     let latest = client.latest().await?;
///     println!("EUR rates on {}: {}", latest["date"], latest["rates"]);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct FixerioClient {
  transport: Transport,
}

impl FixerioClient {
  /// Create a new client from a configuration.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Config`] when the configured gateway requires an
  /// access key and none is set, or when the HTTP client cannot be built.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Transport::new(config)? })
  }

  /// Create a new client from environment variables.
  ///
  /// See [`Config::from_env`] for the variables read.
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  fn config(&self) -> &Config {
    self.transport.config()
  }

  /// Get the latest foreign exchange reference rates with the client
  /// defaults.
  pub async fn latest(&self) -> Result<Value> {
    self.latest_with(RequestOptions::new()).await
  }

  /// Get the latest foreign exchange reference rates with per-call
  /// overrides.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use fixerio_client::{Config, FixerioClient, RequestOptions};
  /// # #[tokio::main]
  /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
  /// # let client = FixerioClient::new(Config::anonymous())?;
  /// let rates = client
  ///     .latest_with(RequestOptions::new().base("USD").symbols(["GBP", "JPY"]))
  ///     .await?;
  /// # Ok(())
  /// # }
  /// ```
  pub async fn latest_with(&self, opts: RequestOptions) -> Result<Value> {
    let resolved = opts.resolve(self.config());
    self.transport.get("latest", &resolved).await
  }

  /// Get historical rates for any day since 1999 with the client defaults.
  ///
  /// The date may be a `chrono::NaiveDate` or a `YYYY-MM-DD` string; a
  /// date value is rendered as ISO-8601, a string is forwarded unvalidated.
  pub async fn historical_rates(&self, date: impl Into<HistoricalDate>) -> Result<Value> {
    self.historical_rates_with(date, RequestOptions::new()).await
  }

  /// Get historical rates for any day since 1999 with per-call overrides.
  pub async fn historical_rates_with(
    &self,
    date: impl Into<HistoricalDate>,
    opts: RequestOptions,
  ) -> Result<Value> {
    let path = date.into().into_path_segment();
    let resolved = opts.resolve(self.config());
    self.transport.get(&path, &resolved).await
  }

  /// Get all currency codes the API supports, wrapped exactly as the API
  /// returns them: `{ "symbols": { "<code>": "<name>", ... } }`.
  ///
  /// Only the key-based gateways serve this endpoint; on the anonymous one
  /// this returns [`Error::Config`] without issuing a request. Of the
  /// client defaults only the secure flag and timeout apply here.
  pub async fn symbols(&self) -> Result<Value> {
    let config = self.config();
    if !config.gateway.supports_symbols() {
      return Err(Error::Config(format!(
        "the symbols endpoint is not available on the {} gateway",
        config.gateway
      )));
    }
    let resolved = ResolvedOptions::bare(config);
    self.transport.get("symbols", &resolved).await
  }

  /// Alias for [`symbols`](Self::symbols), kept from the naming of the
  /// last API generation.
  pub async fn available_currencies(&self) -> Result<Value> {
    self.symbols().await
  }
}
