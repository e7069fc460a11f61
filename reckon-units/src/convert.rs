//! Unit conversion
//!
//! `convert` is a pure function over the global table. Unknown or unrelated
//! units convert as the identity: the engine normalizes every input before
//! each formula run, and values without a convertible unit (dimensionless
//! ratios, currency codes, "M" for molarity) must pass through untouched.

use crate::table::UNITS;
use tracing::debug;

/// Convert `value` from unit `from` to unit `to`.
///
/// Identity when either symbol is unknown or the symbols belong to
/// different dimensions. Affine dimensions (temperature) convert through
/// the canonical base, never directly unit-to-unit. No rounding is applied.
pub fn convert(value: f64, from: &str, to: &str) -> f64 {
    if from == to {
        return value;
    }

    let (src, dst) = match (UNITS.get(from), UNITS.get(to)) {
        (Some(src), Some(dst)) => (src, dst),
        _ => {
            debug!(from, to, "unknown unit symbol, passing value through");
            return value;
        }
    };

    if !src.is_compatible(dst) {
        debug!(
            from,
            to,
            from_dim = %src.dimension,
            to_dim = %dst.dimension,
            "incompatible dimensions, passing value through"
        );
        return value;
    }

    dst.from_base(src.to_base(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimension;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_conversion() {
        assert_relative_eq!(convert(5.0, "km", "m"), 5000.0);
        assert_relative_eq!(convert(1.0, "mi", "km"), 1.609344);
        assert_relative_eq!(convert(10.0, "lb", "kg"), 4.5359237);
    }

    #[test]
    fn test_temperature_goes_through_kelvin() {
        assert_relative_eq!(convert(100.0, "C", "F"), 212.0);
        assert_relative_eq!(convert(0.0, "C", "K"), 273.15);
        assert_relative_eq!(convert(32.0, "F", "C"), 0.0, epsilon = 1e-9);
        assert_relative_eq!(convert(-40.0, "F", "C"), -40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_identity_on_unknown_units() {
        assert_eq!(convert(42.0, "M", "M"), 42.0);
        assert_eq!(convert(42.0, "furlong", "m"), 42.0);
        assert_eq!(convert(42.0, "m", "furlong"), 42.0);
    }

    #[test]
    fn test_identity_on_mismatched_dimensions() {
        assert_eq!(convert(3.0, "kg", "m"), 3.0);
        assert_eq!(convert(3.0, "atm", "K"), 3.0);
    }

    #[test]
    fn test_round_trip_all_pairs() {
        // convert(convert(x, a, b), b, a) ≈ x within 1e-9 relative tolerance
        // for every unit pair in the same dimension.
        let x = 123.456;
        for dim in Dimension::ALL {
            let units = UNITS.by_dimension(dim);
            for a in &units {
                for b in &units {
                    let there = convert(x, &a.symbol, &b.symbol);
                    let back = convert(there, &b.symbol, &a.symbol);
                    assert_relative_eq!(back, x, max_relative = 1e-9);
                }
            }
        }
    }
}
