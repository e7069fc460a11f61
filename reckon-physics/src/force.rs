//! Newton's second law: F = ma

use reckon_core::{CalcError, CalcResult, DiagramKind};
use reckon_engine::{Calculator, CalculatorKind, Category, InputSpec, Inputs, SolveMode};
use serde_json::json;

static FORCE_INPUTS: [InputSpec; 2] = [
    InputSpec::number("m", "Mass", "kg", 10.0),
    InputSpec::number("a", "Acceleration", "m/s2", 9.81),
];

static MASS_INPUTS: [InputSpec; 2] = [
    InputSpec::number("f", "Force", "N", 98.1),
    InputSpec::number("a", "Acceleration", "m/s2", 9.81),
];

static ACCEL_INPUTS: [InputSpec; 2] = [
    InputSpec::number("f", "Force", "N", 98.1),
    InputSpec::number("m", "Mass", "kg", 10.0),
];

static MODES: [SolveMode; 3] = [
    SolveMode {
        target: "F",
        label: "Solve for force",
        inputs: &FORCE_INPUTS,
        calculate: force,
    },
    SolveMode {
        target: "m",
        label: "Solve for mass",
        inputs: &MASS_INPUTS,
        calculate: mass,
    },
    SolveMode {
        target: "a",
        label: "Solve for acceleration",
        inputs: &ACCEL_INPUTS,
        calculate: acceleration,
    },
];

pub const FORCE: Calculator = Calculator {
    id: "force",
    title: "Force",
    category: Category::Physics,
    description: "Newton's second law of motion",
    icon: "gauge",
    kind: CalculatorKind::MultiMode(&MODES),
};

fn gauge(value: f64, unit: &str) -> serde_json::Value {
    json!({ "value": value, "unit": unit })
}

fn force(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let m = inputs.positive("m")?;
    let a = inputs.number("a")?;
    let f = m * a;
    Ok(CalcResult::number(f, "N")
        .with_step("F = m × a")
        .with_step(format!("F = {} kg × {} m/s²", m, a))
        .with_step(format!("F = {} N", f))
        .with_diagram(DiagramKind::Gauge, gauge(f, "N")))
}

fn mass(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let f = inputs.number("f")?;
    let a = inputs.number("a")?;
    if a == 0.0 {
        return Err(CalcError::div_zero("acceleration"));
    }
    let m = f / a;
    Ok(CalcResult::number(m, "kg")
        .with_step("m = F / a")
        .with_step(format!("m = {} N / {} m/s²", f, a))
        .with_step(format!("m = {} kg", m))
        .with_diagram(DiagramKind::Gauge, gauge(m, "kg")))
}

fn acceleration(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let f = inputs.number("f")?;
    let m = inputs.positive("m")?;
    let a = f / m;
    Ok(CalcResult::number(a, "m/s2")
        .with_step("a = F / m")
        .with_step(format!("a = {} N / {} kg", f, m))
        .with_step(format!("a = {} m/s²", a))
        .with_diagram(DiagramKind::Gauge, gauge(a, "m/s2")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use reckon_engine::Session;

    #[test]
    fn test_weight_of_ten_kilograms() {
        let mut session = Session::new(&FORCE);
        let result = session.evaluate().unwrap();
        assert_relative_eq!(result.value.as_number().unwrap(), 98.1);
        assert_eq!(result.unit, "N");
    }

    #[test]
    fn test_pound_mass_is_normalized() {
        let mut session = Session::new(&FORCE);
        session.set_value("m", 1.0);
        session.set_unit("m", "lb");
        session.set_value("a", 1.0);
        let result = session.evaluate().unwrap();
        assert_relative_eq!(result.value.as_number().unwrap(), 0.45359237);
    }

    #[test]
    fn test_mass_mode_guards_zero_acceleration() {
        let mut session = Session::new(&FORCE);
        session.activate(1);
        session.set_value("a", 0.0);
        assert!(session.evaluate().unwrap_err().is_degenerate());
    }

    #[test]
    fn test_acceleration_mode() {
        let mut session = Session::new(&FORCE);
        session.activate(2);
        session.set_value("f", 50.0);
        session.set_value("m", 5.0);
        let result = session.evaluate().unwrap();
        assert_relative_eq!(result.value.as_number().unwrap(), 10.0);
    }
}
