//! Great-circle distance (haversine)

use crate::{check_coord, EARTH_RADIUS_KM};
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

pub const GREAT_CIRCLE: Calculator = Calculator {
    id: "great-circle",
    title: "Great-Circle Distance",
    category: Category::Geography,
    description: "Shortest distance over the Earth's surface between two coordinates",
    icon: "map",
    kind: CalculatorKind::Flat {
        inputs: &INPUTS,
        calculate: great_circle,
    },
};

fn great_circle(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    // Inputs arrive in degrees; the formula needs radians.
    let lat1 = check_coord("lat1", inputs.number("lat1")?, 90.0)?.to_radians();
    let lon1 = check_coord("lon1", inputs.number("lon1")?, 180.0)?.to_radians();
    let lat2 = check_coord("lat2", inputs.number("lat2")?, 90.0)?.to_radians();
    let lon2 = check_coord("lon2", inputs.number("lon2")?, 180.0)?.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    let d = EARTH_RADIUS_KM * c;

    Ok(CalcResult::number(d, "km")
        .with_step("a = sin²(Δφ/2) + cos φ₁ · cos φ₂ · sin²(Δλ/2)")
        .with_step(format!("c = 2 · asin(√a) = {} rad", c))
        .with_step(format!("d = R · c = {} km · {} = {} km", EARTH_RADIUS_KM, c, d))
        .with_diagram(
            DiagramKind::Map,
            json!({
                "from": { "lat": lat1.to_degrees(), "lon": lon1.to_degrees() },
                "to": { "lat": lat2.to_degrees(), "lon": lon2.to_degrees() },
                "distance_km": d,
            }),
        ))
}
