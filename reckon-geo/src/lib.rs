//! Reckon Geo - geography calculator catalog
//!
//! Calculators:
//! - great-circle: haversine distance between two coordinates
//! - compass-bearing: initial bearing from one coordinate to another

mod bearing;
mod distance;

use reckon_engine::Calculator;

/// Mean Earth radius in kilometers (IUGG).
pub(crate) const EARTH_RADIUS_KM: f64 = 6371.0088;

static CATALOG: [Calculator; 2] = [distance::GREAT_CIRCLE, bearing::COMPASS_BEARING];

/// All geography calculators.
pub fn calculators() -> &'static [Calculator] {
    &CATALOG
}

/// Reject latitudes/longitudes outside their valid ranges.
pub(crate) fn check_coord(
    name: &str,
    value: f64,
    limit: f64,
) -> Result<f64, reckon_core::CalcError> {
    if value.abs() > limit {
        return Err(reckon_core::CalcError::invalid_input(
            name,
            format!("must be within ±{} degrees", limit),
        ));
    }
    Ok(value)
}
