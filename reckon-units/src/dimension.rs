//! Physical-quantity dimensions
//!
//! Each dimension has exactly one canonical base unit that every other unit
//! in the dimension converts through. Every unit symbol belongs to at most
//! one dimension inside a single table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category of physical quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Mass,
    Time,
    Temperature,
    Amount,
    Area,
    Volume,
    Velocity,
    Acceleration,
    Force,
    Energy,
    Power,
    Pressure,
    Angle,
    Frequency,
}

impl Dimension {
    /// The canonical base unit symbol for this dimension.
    pub fn base_unit(&self) -> &'static str {
        match self {
            Dimension::Length => "m",
            Dimension::Mass => "kg",
            Dimension::Time => "s",
            Dimension::Temperature => "K",
            Dimension::Amount => "mol",
            Dimension::Area => "m2",
            Dimension::Volume => "L",
            Dimension::Velocity => "m/s",
            Dimension::Acceleration => "m/s2",
            Dimension::Force => "N",
            Dimension::Energy => "J",
            Dimension::Power => "W",
            Dimension::Pressure => "Pa",
            Dimension::Angle => "rad",
            Dimension::Frequency => "Hz",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Time => "time",
            Dimension::Temperature => "temperature",
            Dimension::Amount => "amount",
            Dimension::Area => "area",
            Dimension::Volume => "volume",
            Dimension::Velocity => "velocity",
            Dimension::Acceleration => "acceleration",
            Dimension::Force => "force",
            Dimension::Energy => "energy",
            Dimension::Power => "power",
            Dimension::Pressure => "pressure",
            Dimension::Angle => "angle",
            Dimension::Frequency => "frequency",
        }
    }

    pub const ALL: [Dimension; 15] = [
        Dimension::Length,
        Dimension::Mass,
        Dimension::Time,
        Dimension::Temperature,
        Dimension::Amount,
        Dimension::Area,
        Dimension::Volume,
        Dimension::Velocity,
        Dimension::Acceleration,
        Dimension::Force,
        Dimension::Energy,
        Dimension::Power,
        Dimension::Pressure,
        Dimension::Angle,
        Dimension::Frequency,
    ];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
