//! Reckon Finance - finance calculator catalog
//!
//! Flat, single-mode calculators:
//! - loan-payment: monthly payment and total interest for an amortized loan
//! - compound-interest: future value under periodic compounding
//!
//! Results are plain numbers; locale-aware currency formatting is the
//! caller's concern.

mod interest;
mod loans;

use reckon_engine::Calculator;

static CATALOG: [Calculator; 2] = [loans::LOAN_PAYMENT, interest::COMPOUND_INTEREST];

/// All finance calculators.
pub fn calculators() -> &'static [Calculator] {
    &CATALOG
}

/// (1 + rate)^periods, the compounding growth factor.
pub(crate) fn compound_factor(rate: f64, periods: f64) -> f64 {
    (1.0 + rate).powf(periods)
}
