//! Rate documents, request keys, and errors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// One rate table: `{date, base, rates: {CODE: number}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesDoc {
    pub base: String,
    pub date: NaiveDate,
    pub rates: HashMap<String, f64>,
}

/// Date-range lookup: a map of date to rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesDoc {
    pub base: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rates: BTreeMap<NaiveDate, HashMap<String, f64>>,
}

/// Why a rate lookup failed. Internal detail; the public surface reports
/// unavailability as `None`.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("rate request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("rate endpoint returned status {0}")]
    Status(u16),
    #[error("malformed rate document: {0}")]
    Decode(String),
}

/// A fully-qualified rate request.
///
/// The cache key includes every distinguishing parameter, not just the
/// currency pair: a stale response arriving late can only overwrite data for
/// exactly the same request.
#[derive(Debug, Clone, PartialEq)]
pub enum RateRequest {
    Latest {
        base: String,
        symbols: Vec<String>,
        amount: Option<f64>,
    },
    Historical {
        date: NaiveDate,
        base: String,
        symbols: Vec<String>,
        amount: Option<f64>,
    },
    Trend {
        start: NaiveDate,
        end: NaiveDate,
        base: String,
        symbols: Vec<String>,
    },
}

impl RateRequest {
    pub fn latest(base: &str, symbols: &[&str], amount: Option<f64>) -> Self {
        RateRequest::Latest {
            base: base.to_string(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            amount,
        }
    }

    pub fn historical(date: NaiveDate, base: &str, symbols: &[&str], amount: Option<f64>) -> Self {
        RateRequest::Historical {
            date,
            base: base.to_string(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            amount,
        }
    }

    pub fn trend(start: NaiveDate, end: NaiveDate, base: &str, symbols: &[&str]) -> Self {
        RateRequest::Trend {
            start,
            end,
            base: base.to_string(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Cache key over the full parameter tuple.
    pub fn cache_key(&self) -> String {
        fn amount_part(amount: &Option<f64>) -> String {
            amount.map_or_else(|| "-".to_string(), |a| a.to_string())
        }
        match self {
            RateRequest::Latest {
                base,
                symbols,
                amount,
            } => format!("latest:{}:{}:{}", base, symbols.join(","), amount_part(amount)),
            RateRequest::Historical {
                date,
                base,
                symbols,
                amount,
            } => format!(
                "hist:{}:{}:{}:{}",
                date,
                base,
                symbols.join(","),
                amount_part(amount)
            ),
            RateRequest::Trend {
                start,
                end,
                base,
                symbols,
            } => format!("trend:{}..{}:{}:{}", start, end, base, symbols.join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_includes_all_parameters() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let a = RateRequest::historical(date, "EUR", &["USD"], Some(100.0));
        let b = RateRequest::historical(date, "EUR", &["USD"], Some(200.0));
        let c = RateRequest::historical(date, "EUR", &["USD"], None);
        assert_ne!(a.cache_key(), b.cache_key());
        assert_ne!(a.cache_key(), c.cache_key());
        assert_eq!(a.cache_key(), "hist:2024-01-02:EUR:USD:100");
    }

    #[test]
    fn test_latest_and_historical_never_collide() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let latest = RateRequest::latest("EUR", &["USD"], None);
        let hist = RateRequest::historical(date, "EUR", &["USD"], None);
        assert_ne!(latest.cache_key(), hist.cache_key());
    }

    #[test]
    fn test_rates_doc_decodes_wire_format() {
        let json = r#"{"base":"EUR","date":"2024-01-02","rates":{"USD":1.0945,"GBP":0.8672}}"#;
        let doc: RatesDoc = serde_json::from_str(json).unwrap();
        assert_eq!(doc.rates.get("USD"), Some(&1.0945));
        assert_eq!(doc.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }
}
