//! Calculation errors
//!
//! Errors never crash the engine. Every public entry point returns either a
//! valid result or a typed absence; panics do not cross the dispatch
//! boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a calculation produced no result.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail")]
pub enum CalcError {
    /// A required input was missing, non-numeric, or outside the formula's
    /// domain (e.g. log of a non-positive number).
    #[error("invalid input '{name}': {reason}")]
    InvalidInput { name: String, reason: String },

    /// The computation is mathematically undefined for these inputs
    /// (division by zero, asin argument outside [-1, 1], impossible
    /// geometry).
    #[error("degenerate computation: {0}")]
    Degenerate(String),

    /// An external data source (rate lookup) is temporarily unavailable.
    #[error("external data unavailable: {0}")]
    Unavailable(String),
}

impl CalcError {
    pub fn invalid_input(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(name: impl Into<String>) -> Self {
        Self::invalid_input(name, "missing or not a finite number")
    }

    pub fn degenerate(detail: impl Into<String>) -> Self {
        CalcError::Degenerate(detail.into())
    }

    pub fn div_zero(what: &str) -> Self {
        CalcError::Degenerate(format!("division by zero: {}", what))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, CalcError::Degenerate(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = CalcError::missing("mass");
        assert_eq!(
            e.to_string(),
            "invalid input 'mass': missing or not a finite number"
        );

        let e = CalcError::div_zero("volume");
        assert_eq!(e.to_string(), "degenerate computation: division by zero: volume");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(CalcError::missing("x").is_invalid_input());
        assert!(CalcError::degenerate("x").is_degenerate());
        assert!(!CalcError::degenerate("x").is_invalid_input());
    }
}
