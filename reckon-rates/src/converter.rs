//! Currency conversion over the cached rate source

use chrono::NaiveDate;
use tracing::debug;

use crate::cache::RateCache;
use crate::model::{RateRequest, RatesDoc, TimeSeriesDoc};
use crate::source::{HttpRateSource, RateFetcher};

/// Converts amounts between currencies through a TTL-cached rate source.
///
/// Every lookup returns `Option`: `None` means the rates are temporarily
/// unavailable, and callers should keep showing the last value they had.
pub struct CurrencyConverter<F = HttpRateSource> {
    source: F,
    rates: RateCache<RatesDoc>,
    series: RateCache<TimeSeriesDoc>,
}

impl CurrencyConverter<HttpRateSource> {
    pub fn new() -> Self {
        Self::with_source(HttpRateSource::new())
    }
}

impl Default for CurrencyConverter<HttpRateSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: RateFetcher> CurrencyConverter<F> {
    pub fn with_source(source: F) -> Self {
        Self {
            source,
            rates: RateCache::new(),
            series: RateCache::new(),
        }
    }

    /// Convert `amount` from one currency to another at the latest rate.
    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> Option<f64> {
        if from == to {
            return Some(amount);
        }
        let request = RateRequest::latest(from, &[to], None);
        let symbols = [to.to_string()];
        let doc = self
            .rates
            .get_or_fetch(&request.cache_key(), || self.source.latest(from, &symbols))
            .await?;
        self.apply_rate(&doc, amount, to)
    }

    /// Convert at the rate that held on a past date.
    pub async fn convert_on(
        &self,
        date: NaiveDate,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Option<f64> {
        if from == to {
            return Some(amount);
        }
        let request = RateRequest::historical(date, from, &[to], None);
        let symbols = [to.to_string()];
        let doc = self
            .rates
            .get_or_fetch(&request.cache_key(), || {
                self.source.historical(date, from, &symbols)
            })
            .await?;
        self.apply_rate(&doc, amount, to)
    }

    /// Rate history for a currency pair over a date range, as (date, rate)
    /// points in ascending date order.
    pub async fn trend(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        from: &str,
        to: &str,
    ) -> Option<Vec<(NaiveDate, f64)>> {
        let request = RateRequest::trend(start, end, from, &[to]);
        let symbols = [to.to_string()];
        let doc = self
            .series
            .get_or_fetch(&request.cache_key(), || {
                self.source.timeseries(start, end, from, &symbols)
            })
            .await?;
        Some(
            doc.rates
                .iter()
                .filter_map(|(date, table)| table.get(to).map(|rate| (*date, *rate)))
                .collect(),
        )
    }

    fn apply_rate(&self, doc: &RatesDoc, amount: f64, to: &str) -> Option<f64> {
        match doc.rates.get(to) {
            Some(rate) => Some(amount * rate),
            None => {
                debug!(currency = to, "rate document missing requested symbol");
                None
            }
        }
    }
}
