//! Input metadata and typed access to input values

use reckon_core::CalcError;
use serde::Serialize;
use std::collections::HashMap;

/// Widget kind of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Number,
    Text,
    Select,
}

/// Default value carried by an [`InputSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputDefault {
    Number(f64),
    Text(&'static str),
}

/// Metadata about one calculator input.
///
/// `name` is unique within a solve mode and is the key the calculate
/// function reads. `unit` is the canonical unit the formula expects; the
/// session converts whatever display unit the caller selected into it
/// before dispatch. `min`/`max`, when present, bound the normalized value;
/// out-of-range input is rejected at dispatch as `InvalidInput`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InputSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub kind: InputKind,
    pub default: InputDefault,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    pub options: &'static [&'static str],
}

impl InputSpec {
    pub const fn number(
        name: &'static str,
        label: &'static str,
        unit: &'static str,
        default: f64,
    ) -> Self {
        InputSpec {
            name,
            label,
            unit,
            kind: InputKind::Number,
            default: InputDefault::Number(default),
            min: None,
            max: None,
            step: None,
            options: &[],
        }
    }

    pub const fn bounded(
        name: &'static str,
        label: &'static str,
        unit: &'static str,
        default: f64,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self {
        InputSpec {
            name,
            label,
            unit,
            kind: InputKind::Number,
            default: InputDefault::Number(default),
            min: Some(min),
            max: Some(max),
            step: Some(step),
            options: &[],
        }
    }

    pub const fn text(name: &'static str, label: &'static str, default: &'static str) -> Self {
        InputSpec {
            name,
            label,
            unit: "",
            kind: InputKind::Text,
            default: InputDefault::Text(default),
            min: None,
            max: None,
            step: None,
            options: &[],
        }
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        InputSpec {
            name,
            label,
            unit: "",
            kind: InputKind::Select,
            default: InputDefault::Text(default),
            min: None,
            max: None,
            step: None,
            options,
        }
    }

    /// The runtime value this input starts at when its mode is activated.
    pub fn default_value(&self) -> InputValue {
        match self.default {
            InputDefault::Number(n) => InputValue::Number(n),
            InputDefault::Text(s) => InputValue::Text(s.to_string()),
        }
    }
}

/// A runtime input value as held by a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Text(String),
}

impl InputValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            InputValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InputValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        InputValue::Number(n)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Text(s.to_string())
    }
}

/// Typed, guarded access to the normalized input map a formula receives.
///
/// Formulas read through these accessors so the "missing or non-finite
/// input" policy lives in one place instead of in every calculator.
pub struct Inputs<'a> {
    values: &'a HashMap<String, InputValue>,
}

impl<'a> Inputs<'a> {
    pub fn new(values: &'a HashMap<String, InputValue>) -> Self {
        Inputs { values }
    }

    /// A required finite number.
    pub fn number(&self, name: &str) -> Result<f64, CalcError> {
        match self.values.get(name) {
            Some(InputValue::Number(n)) if n.is_finite() => Ok(*n),
            Some(InputValue::Text(s)) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(n),
                _ => Err(CalcError::invalid_input(name, format!("'{}' is not a number", s))),
            },
            _ => Err(CalcError::missing(name)),
        }
    }

    /// A required finite number that must be strictly positive.
    pub fn positive(&self, name: &str) -> Result<f64, CalcError> {
        let n = self.number(name)?;
        if n <= 0.0 {
            return Err(CalcError::invalid_input(name, "must be greater than zero"));
        }
        Ok(n)
    }

    /// A required finite number that must be zero or greater.
    pub fn non_negative(&self, name: &str) -> Result<f64, CalcError> {
        let n = self.number(name)?;
        if n < 0.0 {
            return Err(CalcError::invalid_input(name, "must not be negative"));
        }
        Ok(n)
    }

    /// A text or select input; empty string when absent.
    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(InputValue::Text(s)) => s,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, InputValue)]) -> HashMap<String, InputValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_number_accessor() {
        let map = values(&[
            ("v", InputValue::Number(2.5)),
            ("s", InputValue::Text("3.5".to_string())),
        ]);
        let inputs = Inputs::new(&map);
        assert_eq!(inputs.number("v").unwrap(), 2.5);
        // Text that parses is accepted
        assert_eq!(inputs.number("s").unwrap(), 3.5);
    }

    #[test]
    fn test_missing_and_non_finite_are_invalid_input() {
        let map = values(&[("nan", InputValue::Number(f64::NAN))]);
        let inputs = Inputs::new(&map);
        assert!(inputs.number("absent").unwrap_err().is_invalid_input());
        assert!(inputs.number("nan").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_domain_guards() {
        let map = values(&[("x", InputValue::Number(-1.0))]);
        let inputs = Inputs::new(&map);
        assert!(inputs.positive("x").is_err());
        assert!(inputs.non_negative("x").is_err());
    }

    #[test]
    fn test_spec_serializes_for_catalog_export() {
        let spec = InputSpec::bounded("apr", "Annual rate", "%", 5.5, 0.0, 100.0, 0.05);
        let json = serde_json::to_value(spec).unwrap();
        assert_eq!(json["name"], "apr");
        assert_eq!(json["kind"], "number");
        assert_eq!(json["default"], 5.5);
        assert_eq!(json["min"], 0.0);
        assert_eq!(json["max"], 100.0);

        // Unbounded specs omit the bound fields entirely.
        let json = serde_json::to_value(InputSpec::number("n", "Moles", "mol", 0.5)).unwrap();
        assert!(json.get("min").is_none());
    }

    #[test]
    fn test_default_value() {
        let spec = InputSpec::number("n", "Moles", "mol", 0.5);
        assert_eq!(spec.default_value(), InputValue::Number(0.5));

        let spec = InputSpec::select("gas", "Gas", &["He", "Ne"], "He");
        assert_eq!(spec.default_value(), InputValue::Text("He".to_string()));
    }
}
