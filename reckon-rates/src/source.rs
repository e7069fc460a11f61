//! HTTP rate source

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use crate::model::{RateError, RatesDoc, TimeSeriesDoc};

const DEFAULT_BASE_URL: &str = "https://api.frankfurter.dev/v1";

/// Where rate documents come from. Tests substitute an in-memory fetcher.
#[async_trait]
pub trait RateFetcher: Send + Sync {
    async fn latest(&self, base: &str, symbols: &[String]) -> Result<RatesDoc, RateError>;

    async fn historical(
        &self,
        date: NaiveDate,
        base: &str,
        symbols: &[String],
    ) -> Result<RatesDoc, RateError>;

    async fn timeseries(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        base: &str,
        symbols: &[String],
    ) -> Result<TimeSeriesDoc, RateError>;
}

/// Fetches rate documents from a Frankfurter-compatible endpoint.
pub struct HttpRateSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRateSource {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        base: &str,
        symbols: &[String],
    ) -> Result<T, RateError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, base, "fetching rates");
        let symbols = symbols.join(",");
        let response = self
            .client
            .get(&url)
            .query(&[("base", base), ("symbols", symbols.as_str())])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Status(status.as_u16()));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| RateError::Decode(err.to_string()))
    }
}

impl Default for HttpRateSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateFetcher for HttpRateSource {
    async fn latest(&self, base: &str, symbols: &[String]) -> Result<RatesDoc, RateError> {
        self.fetch("latest", base, symbols).await
    }

    async fn historical(
        &self,
        date: NaiveDate,
        base: &str,
        symbols: &[String],
    ) -> Result<RatesDoc, RateError> {
        self.fetch(&date.to_string(), base, symbols).await
    }

    async fn timeseries(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        base: &str,
        symbols: &[String],
    ) -> Result<TimeSeriesDoc, RateError> {
        self.fetch(&format!("{start}..{end}"), base, symbols).await
    }
}
