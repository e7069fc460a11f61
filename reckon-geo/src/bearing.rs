//! Initial compass bearing between two coordinates

use crate::check_coord;
use reckon_core::{CalcError, CalcResult, DiagramKind};
use reckon_engine::{Calculator, CalculatorKind, Category, InputSpec, Inputs};
use serde_json::json;

static INPUTS: [InputSpec; 4] = [
    // Defaults: London -> Paris.
    InputSpec::bounded("lat1", "Start latitude", "deg", 51.5074, -90.0, 90.0, 0.0001),
    InputSpec::bounded("lon1", "Start longitude", "deg", -0.1278, -180.0, 180.0, 0.0001),
    InputSpec::bounded("lat2", "End latitude", "deg", 48.8566, -90.0, 90.0, 0.0001),
    InputSpec::bounded("lon2", "End longitude", "deg", 2.3522, -180.0, 180.0, 0.0001),
];

pub const COMPASS_BEARING: Calculator = Calculator {
    id: "compass-bearing",
    title: "Compass Bearing",
    category: Category::Geography,
    description: "Initial bearing to follow from the start point toward the end point",
    icon: "compass",
    kind: CalculatorKind::Flat {
        inputs: &INPUTS,
        calculate: bearing,
    },
};

fn bearing(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let lat1 = check_coord("lat1", inputs.number("lat1")?, 90.0)?.to_radians();
    let lon1 = check_coord("lon1", inputs.number("lon1")?, 180.0)?.to_radians();
    let lat2 = check_coord("lat2", inputs.number("lat2")?, 90.0)?.to_radians();
    let lon2 = check_coord("lon2", inputs.number("lon2")?, 180.0)?.to_radians();

    let dlon = lon2 - lon1;
    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    let theta = y.atan2(x).to_degrees();
    let bearing = (theta + 360.0) % 360.0;

    Ok(CalcResult::number(bearing, "deg")
        .with_step("θ = atan2(sin Δλ · cos φ₂, cos φ₁ · sin φ₂ − sin φ₁ · cos φ₂ · cos Δλ)")
        .with_step(format!("θ = {}°, normalized to [0°, 360°)", theta))
        .with_step(format!("bearing = {}°", bearing))
        .with_diagram(DiagramKind::Gauge, json!({ "value": bearing, "unit": "deg" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use reckon_engine::Session;

    #[test]
    fn test_london_to_paris_heads_southeast() {
        let mut session = Session::new(&COMPASS_BEARING);
        let result = session.evaluate().unwrap();
        assert_relative_eq!(result.value.as_number().unwrap(), 148.0, epsilon = 0.5);
    }

    #[test]
    fn test_due_north() {
        let mut session = Session::new(&COMPASS_BEARING);
        session.set_value("lat1", 0.0);
        session.set_value("lon1", 10.0);
        session.set_value("lat2", 10.0);
        session.set_value("lon2", 10.0);
        let result = session.evaluate().unwrap();
        assert_relative_eq!(result.value.as_number().unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_due_east_on_equator() {
        let mut session = Session::new(&COMPASS_BEARING);
        session.set_value("lat1", 0.0);
        session.set_value("lon1", 0.0);
        session.set_value("lat2", 0.0);
        session.set_value("lon2", 10.0);
        let result = session.evaluate().unwrap();
        assert_relative_eq!(result.value.as_number().unwrap(), 90.0, epsilon = 1e-9);
    }
}
