//! The global unit table

use crate::{Dimension, UnitDef};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Global unit table, built once at first use and never mutated.
pub static UNITS: LazyLock<UnitTable> = LazyLock::new(UnitTable::new);

/// Registry of all known units, keyed by symbol with an alias map.
pub struct UnitTable {
    units: HashMap<String, UnitDef>,
    aliases: HashMap<String, String>,
}

impl UnitTable {
    pub fn new() -> Self {
        let mut table = UnitTable {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        table.register_all();
        table
    }

    /// Look up a unit by symbol or alias.
    pub fn get(&self, symbol: &str) -> Option<&UnitDef> {
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        if let Some(canonical) = self.aliases.get(symbol) {
            return self.units.get(canonical);
        }
        None
    }

    /// The dimension a symbol belongs to, if any.
    pub fn dimension_of(&self, symbol: &str) -> Option<Dimension> {
        self.get(symbol).map(|u| u.dimension)
    }

    /// All units in a dimension.
    pub fn by_dimension(&self, dimension: Dimension) -> Vec<&UnitDef> {
        self.units
            .values()
            .filter(|u| u.dimension == dimension)
            .collect()
    }

    /// All registered unit symbols.
    pub fn symbols(&self) -> Vec<&str> {
        self.units.keys().map(|s| s.as_str()).collect()
    }

    fn register(&mut self, unit: UnitDef) {
        debug_assert!(
            !self.units.contains_key(&unit.symbol),
            "unit symbol '{}' registered twice",
            unit.symbol
        );
        self.units.insert(unit.symbol.clone(), unit);
    }

    fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn register_all(&mut self) {
        self.register_length();
        self.register_mass();
        self.register_time();
        self.register_temperature();
        self.register_amount();
        self.register_area();
        self.register_volume();
        self.register_velocity();
        self.register_acceleration();
        self.register_force();
        self.register_energy();
        self.register_power();
        self.register_pressure();
        self.register_angle();
        self.register_frequency();
    }

    fn register_length(&mut self) {
        use Dimension::Length;
        self.register(UnitDef::new("m", "meter", Length, 1.0));
        self.register(UnitDef::new("km", "kilometer", Length, 1000.0));
        self.register(UnitDef::new("cm", "centimeter", Length, 0.01));
        self.register(UnitDef::new("mm", "millimeter", Length, 0.001));
        self.register(UnitDef::new("in", "inch", Length, 0.0254));
        self.register(UnitDef::new("ft", "foot", Length, 0.3048));
        self.register(UnitDef::new("yd", "yard", Length, 0.9144));
        self.register(UnitDef::new("mi", "mile", Length, 1609.344));
        self.register(UnitDef::new("nmi", "nautical mile", Length, 1852.0));

        self.alias("meter", "m");
        self.alias("meters", "m");
        self.alias("kilometer", "km");
        self.alias("kilometers", "km");
        self.alias("inch", "in");
        self.alias("inches", "in");
        self.alias("foot", "ft");
        self.alias("feet", "ft");
        self.alias("mile", "mi");
        self.alias("miles", "mi");
    }

    fn register_mass(&mut self) {
        use Dimension::Mass;
        self.register(UnitDef::new("kg", "kilogram", Mass, 1.0));
        self.register(UnitDef::new("g", "gram", Mass, 0.001));
        self.register(UnitDef::new("mg", "milligram", Mass, 0.000001));
        self.register(UnitDef::new("t", "metric ton", Mass, 1000.0));
        self.register(UnitDef::new("lb", "pound", Mass, 0.45359237));
        self.register(UnitDef::new("oz", "ounce", Mass, 0.028349523125));

        self.alias("kilogram", "kg");
        self.alias("kilograms", "kg");
        self.alias("gram", "g");
        self.alias("grams", "g");
        self.alias("pound", "lb");
        self.alias("pounds", "lb");
        self.alias("lbs", "lb");
    }

    fn register_time(&mut self) {
        use Dimension::Time;
        self.register(UnitDef::new("s", "second", Time, 1.0));
        self.register(UnitDef::new("min", "minute", Time, 60.0));
        self.register(UnitDef::new("h", "hour", Time, 3600.0));
        self.register(UnitDef::new("d", "day", Time, 86400.0));

        self.alias("sec", "s");
        self.alias("second", "s");
        self.alias("seconds", "s");
        self.alias("minute", "min");
        self.alias("minutes", "min");
        self.alias("hr", "h");
        self.alias("hour", "h");
        self.alias("hours", "h");
        self.alias("day", "d");
        self.alias("days", "d");
    }

    fn register_temperature(&mut self) {
        use Dimension::Temperature;
        // Affine scales convert through Kelvin, never unit-to-unit, which
        // keeps the table linear in the number of units.
        self.register(UnitDef::new("K", "kelvin", Temperature, 1.0));
        self.register(UnitDef::with_offset(
            "C",
            "degree Celsius",
            Temperature,
            1.0,
            273.15,
        ));
        self.register(UnitDef::with_offset(
            "F",
            "degree Fahrenheit",
            Temperature,
            5.0 / 9.0,
            459.67 * 5.0 / 9.0,
        ));

        self.alias("kelvin", "K");
        self.alias("celsius", "C");
        self.alias("°C", "C");
        self.alias("fahrenheit", "F");
        self.alias("°F", "F");
    }

    fn register_amount(&mut self) {
        use Dimension::Amount;
        self.register(UnitDef::new("mol", "mole", Amount, 1.0));
        self.register(UnitDef::new("mmol", "millimole", Amount, 0.001));

        self.alias("mole", "mol");
        self.alias("moles", "mol");
    }

    fn register_area(&mut self) {
        use Dimension::Area;
        self.register(UnitDef::new("m2", "square meter", Area, 1.0));
        self.register(UnitDef::new("km2", "square kilometer", Area, 1_000_000.0));
        self.register(UnitDef::new("cm2", "square centimeter", Area, 0.0001));
        self.register(UnitDef::new("ft2", "square foot", Area, 0.09290304));
        self.register(UnitDef::new("acre", "acre", Area, 4046.8564224));
        self.register(UnitDef::new("ha", "hectare", Area, 10_000.0));
    }

    fn register_volume(&mut self) {
        use Dimension::Volume;
        self.register(UnitDef::new("L", "liter", Volume, 1.0));
        self.register(UnitDef::new("mL", "milliliter", Volume, 0.001));
        self.register(UnitDef::new("m3", "cubic meter", Volume, 1000.0));
        self.register(UnitDef::new("cm3", "cubic centimeter", Volume, 0.001));
        self.register(UnitDef::new("gal", "US gallon", Volume, 3.785411784));
        self.register(UnitDef::new("qt", "US quart", Volume, 0.946352946));

        self.alias("l", "L");
        self.alias("liter", "L");
        self.alias("liters", "L");
        self.alias("ml", "mL");
        self.alias("gallon", "gal");
        self.alias("gallons", "gal");
    }

    fn register_velocity(&mut self) {
        use Dimension::Velocity;
        self.register(UnitDef::new("m/s", "meter per second", Velocity, 1.0));
        self.register(UnitDef::new("km/h", "kilometer per hour", Velocity, 1.0 / 3.6));
        self.register(UnitDef::new("mph", "mile per hour", Velocity, 0.44704));
        self.register(UnitDef::new("ft/s", "foot per second", Velocity, 0.3048));
        self.register(UnitDef::new("kn", "knot", Velocity, 1852.0 / 3600.0));

        self.alias("kmh", "km/h");
        self.alias("knot", "kn");
        self.alias("knots", "kn");
    }

    fn register_acceleration(&mut self) {
        use Dimension::Acceleration;
        self.register(UnitDef::new("m/s2", "meter per second squared", Acceleration, 1.0));
        self.register(UnitDef::new("ft/s2", "foot per second squared", Acceleration, 0.3048));
        self.register(UnitDef::new("g0", "standard gravity", Acceleration, 9.80665));
    }

    fn register_force(&mut self) {
        use Dimension::Force;
        self.register(UnitDef::new("N", "newton", Force, 1.0));
        self.register(UnitDef::new("kN", "kilonewton", Force, 1000.0));
        self.register(UnitDef::new("lbf", "pound-force", Force, 4.4482216152605));

        self.alias("newton", "N");
        self.alias("newtons", "N");
    }

    fn register_energy(&mut self) {
        use Dimension::Energy;
        self.register(UnitDef::new("J", "joule", Energy, 1.0));
        self.register(UnitDef::new("kJ", "kilojoule", Energy, 1000.0));
        self.register(UnitDef::new("cal", "calorie", Energy, 4.184));
        self.register(UnitDef::new("kcal", "kilocalorie", Energy, 4184.0));
        self.register(UnitDef::new("Wh", "watt-hour", Energy, 3600.0));
        self.register(UnitDef::new("kWh", "kilowatt-hour", Energy, 3_600_000.0));

        self.alias("joule", "J");
        self.alias("joules", "J");
        self.alias("calorie", "cal");
        self.alias("calories", "cal");
    }

    fn register_power(&mut self) {
        use Dimension::Power;
        self.register(UnitDef::new("W", "watt", Power, 1.0));
        self.register(UnitDef::new("kW", "kilowatt", Power, 1000.0));
        self.register(UnitDef::new("MW", "megawatt", Power, 1_000_000.0));
        self.register(UnitDef::new("hp", "horsepower", Power, 745.69987158227));

        self.alias("watt", "W");
        self.alias("watts", "W");
        self.alias("horsepower", "hp");
    }

    fn register_pressure(&mut self) {
        use Dimension::Pressure;
        self.register(UnitDef::new("Pa", "pascal", Pressure, 1.0));
        self.register(UnitDef::new("kPa", "kilopascal", Pressure, 1000.0));
        self.register(UnitDef::new("atm", "standard atmosphere", Pressure, 101_325.0));
        self.register(UnitDef::new("bar", "bar", Pressure, 100_000.0));
        self.register(UnitDef::new("psi", "pound per square inch", Pressure, 6894.757293168));
        self.register(UnitDef::new("mmHg", "millimeter of mercury", Pressure, 133.322387415));

        self.alias("pascal", "Pa");
        self.alias("torr", "mmHg");
    }

    fn register_angle(&mut self) {
        use Dimension::Angle;
        self.register(UnitDef::new("rad", "radian", Angle, 1.0));
        self.register(UnitDef::new("deg", "degree", Angle, std::f64::consts::PI / 180.0));

        self.alias("radian", "rad");
        self.alias("radians", "rad");
        self.alias("degree", "deg");
        self.alias("degrees", "deg");
        self.alias("°", "deg");
    }

    fn register_frequency(&mut self) {
        use Dimension::Frequency;
        self.register(UnitDef::new("Hz", "hertz", Frequency, 1.0));
        self.register(UnitDef::new("kHz", "kilohertz", Frequency, 1000.0));
        self.register(UnitDef::new("rpm", "revolution per minute", Frequency, 1.0 / 60.0));

        self.alias("hertz", "Hz");
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_symbol_and_alias() {
        assert_eq!(UNITS.get("km").map(|u| u.scale_to_base), Some(1000.0));
        assert_eq!(UNITS.get("kilometers").map(|u| u.symbol.as_str()), Some("km"));
        assert!(UNITS.get("cubit").is_none());
    }

    #[test]
    fn test_dimension_of() {
        assert_eq!(UNITS.dimension_of("atm"), Some(Dimension::Pressure));
        assert_eq!(UNITS.dimension_of("mol"), Some(Dimension::Amount));
        assert_eq!(UNITS.dimension_of("M"), None);
    }

    #[test]
    fn test_every_dimension_has_exactly_one_base() {
        for dim in Dimension::ALL {
            let bases: Vec<_> = UNITS
                .by_dimension(dim)
                .into_iter()
                .filter(|u| u.is_base())
                .collect();
            assert_eq!(bases.len(), 1, "dimension {} base units: {:?}", dim, bases);
            assert_eq!(bases[0].symbol, dim.base_unit());
        }
    }

    #[test]
    fn test_symbols_belong_to_one_dimension() {
        // Symbol uniqueness across dimensions is enforced by the single map;
        // spot-check some easily confused symbols.
        assert_eq!(UNITS.dimension_of("mm"), Some(Dimension::Length));
        assert_eq!(UNITS.dimension_of("mmHg"), Some(Dimension::Pressure));
        assert_eq!(UNITS.dimension_of("min"), Some(Dimension::Time));
    }
}
