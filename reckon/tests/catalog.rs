//! End-to-end checks over the assembled catalog.

use approx::assert_relative_eq;
use reckon::{registry, CalcValue, Category, DiagramKind, Session};

#[test]
fn test_unknown_id_is_none_not_panic() {
    assert!(registry().get("does-not-exist").is_none());
}

#[test]
fn test_every_calculator_evaluates_with_defaults() {
    // Every mode of every calculator must produce a finite result (or a
    // textual classification) from its own seeded defaults.
    for id in registry().ids() {
        let calculator = registry().get(id).unwrap();
        for i in 0..calculator.mode_count() {
            let mut session = Session::new(calculator);
            assert!(session.activate(i), "{id}: mode {i} missing");
            let result = session
                .evaluate()
                .unwrap_or_else(|err| panic!("{id} mode {i} failed on defaults: {err}"));
            match result.value {
                CalcValue::Number(n) => assert!(n.is_finite(), "{id} mode {i} non-finite"),
                CalcValue::Text(ref s) => assert!(!s.is_empty(), "{id} mode {i} empty text"),
            }
            assert!(!result.steps.is_empty(), "{id} mode {i} has no steps");
        }
    }
}

#[test]
fn test_categories_cover_the_catalog() {
    let total: usize = [
        Category::Physics,
        Category::Chemistry,
        Category::Geography,
        Category::Finance,
    ]
    .into_iter()
    .map(|c| registry().by_category(c).len())
    .sum();
    assert_eq!(total, registry().len());
}

#[test]
fn test_molarity_reference_case() {
    let mut session = Session::new(registry().get("molarity").unwrap());
    session.set_value("n", 0.5);
    session.set_value("v", 1.0);
    let result = session.evaluate().unwrap();
    assert_relative_eq!(result.value.as_number().unwrap(), 0.5);
    assert_eq!(result.unit, "M");
}

#[test]
fn test_ideal_gas_reference_case() {
    // 1 mol at 298 K in 22.4 L: P = nRT/V with R = 0.0821.
    let mut session = Session::new(registry().get("ideal-gas").unwrap());
    session.set_value("n", 1.0);
    session.set_value("t", 298.0);
    session.set_value("v", 22.4);
    let result = session.evaluate().unwrap();
    assert_relative_eq!(result.value.as_number().unwrap(), 1.0922, epsilon = 1e-3);
}

#[test]
fn test_celsius_input_matches_kelvin_input() {
    let gas = registry().get("ideal-gas").unwrap();

    let mut kelvin = Session::new(gas);
    kelvin.set_value("t", 298.0);
    let p_kelvin = kelvin.evaluate().unwrap().value.as_number().unwrap();

    let mut celsius = Session::new(gas);
    celsius.set_value("t", 24.85);
    celsius.set_unit("t", "C");
    let p_celsius = celsius.evaluate().unwrap().value.as_number().unwrap();

    assert_relative_eq!(p_kelvin, p_celsius, epsilon = 1e-9);
}

#[test]
fn test_loan_reference_case() {
    let mut session = Session::new(registry().get("loan-payment").unwrap());
    let result = session.evaluate().unwrap();
    let payment = result.value.as_number().unwrap();
    assert_relative_eq!(payment, 382.02, epsilon = 0.01);
    assert_relative_eq!(payment * 60.0 - 20000.0, 2921.4, epsilon = 1.0);
}

#[test]
fn test_great_circle_and_bearing_defaults() {
    // London -> Paris.
    let mut distance = Session::new(registry().get("great-circle").unwrap());
    let km = distance.evaluate().unwrap().value.as_number().unwrap();
    assert_relative_eq!(km, 343.5, epsilon = 1.0);

    let mut bearing = Session::new(registry().get("compass-bearing").unwrap());
    let deg = bearing.evaluate().unwrap().value.as_number().unwrap();
    assert_relative_eq!(deg, 148.0, epsilon = 1.0);
}

#[test]
fn test_limiting_reactant_is_textual() {
    let mut session = Session::new(registry().get("limiting-reactant").unwrap());
    let result = session.evaluate().unwrap();
    assert!(result.value.as_text().is_some());
}

#[test]
fn test_evaluate_is_idempotent_across_catalog() {
    let mut session = Session::new(registry().get("kinetic-energy").unwrap());
    session.set_value("m", 3.0);
    session.set_value("v", 7.0);
    let first = session.evaluate().unwrap();
    let second = session.evaluate().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_mode_switch_resets_to_mode_defaults() {
    let gas = registry().get("ideal-gas").unwrap();
    let mut session = Session::new(gas);
    session.set_value("t", 1000.0);
    session.evaluate().unwrap();

    // Temperature mode seeds its own defaults, not the 1000 K left behind.
    let t_mode = (0..gas.mode_count())
        .find(|&i| gas.mode(i).unwrap().target == "T")
        .unwrap();
    assert!(session.activate(t_mode));
    assert!(session.result().is_none());
    let result = session.evaluate().unwrap();
    assert!(result.value.as_number().unwrap().is_finite());
}

#[test]
fn test_diagram_payload_round_trips_as_json() {
    let mut session = Session::new(registry().get("compound-interest").unwrap());
    let result = session.evaluate().unwrap();
    let diagram = result.diagram.unwrap();
    assert_eq!(diagram.kind, DiagramKind::Line);
    let encoded = serde_json::to_string(&diagram).unwrap();
    assert!(encoded.contains("\"kind\":\"line\""));
}

#[test]
fn test_unit_conversion_reference_points() {
    assert_relative_eq!(reckon::convert(100.0, "C", "F"), 212.0, epsilon = 1e-9);
    assert_relative_eq!(reckon::convert(0.0, "C", "K"), 273.15, epsilon = 1e-9);
    // Unknown symbols fall open to identity.
    assert_relative_eq!(reckon::convert(5.0, "XYZ", "m"), 5.0);
}
