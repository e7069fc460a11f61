//! Reckon Rates - time-bounded external-rate cache
//!
//! Currency calculators depend on an external rate source, the one failable,
//! asynchronous data source in the workspace. This crate wraps it in a
//! TTL-keyed cache: entries younger than the TTL are served without
//! re-fetching, expiry is lazy, failures are returned as `None` and never
//! cached, and concurrent requests for the same key collapse to a single
//! fetch.
//!
//! Callers must treat `None` as "rates temporarily unavailable" and keep
//! prior displayed values rather than blanking the UI.

mod cache;
mod converter;
mod model;
mod source;

pub use cache::RateCache;
pub use converter::CurrencyConverter;
pub use model::{RateError, RateRequest, RatesDoc, TimeSeriesDoc};
pub use source::{HttpRateSource, RateFetcher};

use std::time::Duration;

/// How long a fetched rate document stays fresh.
pub const RATE_TTL: Duration = Duration::from_secs(10 * 60);
