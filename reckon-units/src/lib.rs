//! Reckon Units - dimensional unit table and conversion
//!
//! A static registry of physical-quantity dimensions, each mapping unit
//! symbols to a linear scale factor (and, for temperature, an affine
//! offset) relative to one canonical base unit per dimension.
//!
//! Conversion is deliberately fail-open: if either symbol is unknown or the
//! two symbols belong to different dimensions, `convert` is the identity on
//! the value. Not every displayed quantity carries a convertible unit
//! (dimensionless ratios, currency codes), and a calculator must keep
//! working when it does not.
//!
//! Dimensions covered:
//! - Length (m, km, ft, mi, ...)
//! - Mass (kg, g, lb, oz, ...)
//! - Time (s, min, h, d)
//! - Temperature (K, C, F)
//! - Amount (mol, mmol)
//! - Area (m2, km2, ft2, acre, ...)
//! - Volume (L, mL, m3, gal, ...)
//! - Velocity (m/s, km/h, mph, ...)
//! - Acceleration (m/s2, ft/s2, g0)
//! - Force (N, kN, lbf)
//! - Energy (J, kJ, cal, kWh, ...)
//! - Power (W, kW, hp)
//! - Pressure (Pa, kPa, atm, bar, psi, mmHg)
//! - Angle (rad, deg)
//! - Frequency (Hz, kHz, rpm)

mod convert;
mod dimension;
mod table;
mod unit;

pub use convert::convert;
pub use dimension::Dimension;
pub use table::{UnitTable, UNITS};
pub use unit::UnitDef;
