//! Kinetic energy: KE = ½mv²

use reckon_core::{CalcError, CalcResult, DiagramKind};
use reckon_engine::{Calculator, CalculatorKind, Category, InputSpec, Inputs, SolveMode};
use serde_json::json;

static ENERGY_INPUTS: [InputSpec; 2] = [
    InputSpec::number("m", "Mass", "kg", 1.0),
    InputSpec::number("v", "Speed", "m/s", 10.0),
];

static MASS_INPUTS: [InputSpec; 2] = [
    InputSpec::number("ke", "Kinetic energy", "J", 50.0),
    InputSpec::number("v", "Speed", "m/s", 10.0),
];

static SPEED_INPUTS: [InputSpec; 2] = [
    InputSpec::number("ke", "Kinetic energy", "J", 50.0),
    InputSpec::number("m", "Mass", "kg", 1.0),
];

static MODES: [SolveMode; 3] = [
    SolveMode {
        target: "KE",
        label: "Solve for energy",
        inputs: &ENERGY_INPUTS,
        calculate: energy,
    },
    SolveMode {
        target: "m",
        label: "Solve for mass",
        inputs: &MASS_INPUTS,
        calculate: mass,
    },
    SolveMode {
        target: "v",
        label: "Solve for speed",
        inputs: &SPEED_INPUTS,
        calculate: speed,
    },
];

pub const KINETIC_ENERGY: Calculator = Calculator {
    id: "kinetic-energy",
    title: "Kinetic Energy",
    category: Category::Physics,
    description: "Energy of a moving body",
    icon: "bolt",
    kind: CalculatorKind::MultiMode(&MODES),
};

fn energy(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let m = inputs.positive("m")?;
    let v = inputs.number("v")?;
    let ke = 0.5 * m * v * v;
    Ok(CalcResult::number(ke, "J")
        .with_step("KE = ½ × m × v²")
        .with_step(format!("KE = ½ × {} kg × ({} m/s)²", m, v))
        .with_step(format!("KE = {} J", ke))
        .with_diagram(DiagramKind::Gauge, json!({ "value": ke, "unit": "J" })))
}

fn mass(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let ke = inputs.non_negative("ke")?;
    let v = inputs.number("v")?;
    if v == 0.0 {
        return Err(CalcError::div_zero("speed"));
    }
    let m = 2.0 * ke / (v * v);
    Ok(CalcResult::number(m, "kg")
        .with_step("m = 2 × KE / v²")
        .with_step(format!("m = 2 × {} J / ({} m/s)²", ke, v))
        .with_step(format!("m = {} kg", m)))
}

fn speed(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let ke = inputs.non_negative("ke")?;
    let m = inputs.positive("m")?;
    let v = (2.0 * ke / m).sqrt();
    Ok(CalcResult::number(v, "m/s")
        .with_step("v = √(2 × KE / m)")
        .with_step(format!("v = √(2 × {} J / {} kg)", ke, m))
        .with_step(format!("v = {} m/s", v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use reckon_engine::Session;

    #[test]
    fn test_energy_of_default_body() {
        let mut session = Session::new(&KINETIC_ENERGY);
        let result = session.evaluate().unwrap();
        assert_relative_eq!(result.value.as_number().unwrap(), 50.0);
    }

    #[test]
    fn test_speed_mode_inverts_energy_mode() {
        let mut session = Session::new(&KINETIC_ENERGY);
        session.activate(2);
        session.set_value("ke", 50.0);
        session.set_value("m", 1.0);
        let result = session.evaluate().unwrap();
        assert_relative_eq!(result.value.as_number().unwrap(), 10.0);
    }

    #[test]
    fn test_negative_energy_is_invalid() {
        let mut session = Session::new(&KINETIC_ENERGY);
        session.activate(2);
        session.set_value("ke", -1.0);
        assert!(session.evaluate().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_kilometers_per_hour_are_normalized() {
        let mut session = Session::new(&KINETIC_ENERGY);
        session.set_value("v", 36.0);
        session.set_unit("v", "km/h");
        let result = session.evaluate().unwrap();
        assert_relative_eq!(result.value.as_number().unwrap(), 50.0, epsilon = 1e-9);
    }
}
