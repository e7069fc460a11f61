//! Unit definitions with conversion factors

use crate::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A display unit with its affine transform to the dimension's base unit.
///
/// `base = raw * scale_to_base + offset_to_base`
/// `raw  = (base - offset_to_base) / scale_to_base`
///
/// Plain linear units have `offset_to_base == 0`. All factors are IEEE-754
/// doubles; the converter performs no rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDef {
    /// The unit symbol (e.g. "m", "kg", "C")
    pub symbol: String,
    /// The unit name (e.g. "meter", "kilogram", "degree Celsius")
    pub name: String,
    pub dimension: Dimension,
    pub scale_to_base: f64,
    pub offset_to_base: f64,
}

impl UnitDef {
    /// Linear unit (no offset).
    pub fn new(symbol: &str, name: &str, dimension: Dimension, scale_to_base: f64) -> Self {
        UnitDef {
            symbol: symbol.to_string(),
            name: name.to_string(),
            dimension,
            scale_to_base,
            offset_to_base: 0.0,
        }
    }

    /// Affine unit (temperature scales).
    pub fn with_offset(
        symbol: &str,
        name: &str,
        dimension: Dimension,
        scale_to_base: f64,
        offset_to_base: f64,
    ) -> Self {
        UnitDef {
            symbol: symbol.to_string(),
            name: name.to_string(),
            dimension,
            scale_to_base,
            offset_to_base,
        }
    }

    pub fn is_base(&self) -> bool {
        self.scale_to_base == 1.0 && self.offset_to_base == 0.0
    }

    pub fn is_affine(&self) -> bool {
        self.offset_to_base != 0.0
    }

    pub fn is_compatible(&self, other: &UnitDef) -> bool {
        self.dimension == other.dimension
    }

    /// Convert a value in this unit to the dimension's base unit.
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.scale_to_base + self.offset_to_base
    }

    /// Convert a value in the dimension's base unit to this unit.
    pub fn from_base(&self, base: f64) -> f64 {
        (base - self.offset_to_base) / self.scale_to_base
    }
}

impl fmt::Display for UnitDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
