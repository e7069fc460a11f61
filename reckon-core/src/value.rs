//! Computed values
//!
//! Quantitative results are numbers; classification results (e.g. "Reactant
//! A is limiting") are text. Callers branch on the variant before
//! formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value slot of a calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CalcValue {
    Number(f64),
    Text(String),
}

impl CalcValue {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CalcValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CalcValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, CalcValue::Number(_))
    }

    /// True for a numeric value that is NaN or infinite.
    ///
    /// The dispatch boundary uses this to catch degenerate computations a
    /// formula failed to guard itself.
    pub fn is_non_finite(&self) -> bool {
        matches!(self, CalcValue::Number(n) if !n.is_finite())
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CalcValue::Number(_) => "Number",
            CalcValue::Text(_) => "Text",
        }
    }
}

impl From<f64> for CalcValue {
    fn from(n: f64) -> Self {
        CalcValue::Number(n)
    }
}

impl From<&str> for CalcValue {
    fn from(s: &str) -> Self {
        CalcValue::Text(s.to_string())
    }
}

impl From<String> for CalcValue {
    fn from(s: String) -> Self {
        CalcValue::Text(s)
    }
}

impl fmt::Display for CalcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcValue::Number(n) => write!(f, "{}", n),
            CalcValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let n = CalcValue::Number(1.5);
        assert_eq!(n.as_number(), Some(1.5));
        assert_eq!(n.as_text(), None);

        let t = CalcValue::from("limiting");
        assert_eq!(t.as_text(), Some("limiting"));
        assert_eq!(t.as_number(), None);
    }

    #[test]
    fn test_non_finite_detection() {
        assert!(CalcValue::Number(f64::NAN).is_non_finite());
        assert!(CalcValue::Number(f64::INFINITY).is_non_finite());
        assert!(!CalcValue::Number(0.0).is_non_finite());
        assert!(!CalcValue::from("text").is_non_finite());
    }
}
