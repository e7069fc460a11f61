//! Ohm's law: V = IR
//!
//! Electrical symbols are not in the unit table, so values pass through the
//! converter unchanged; the inputs are already in their canonical units.

use reckon_core::{CalcError, CalcResult, DiagramKind};
use reckon_engine::{Calculator, CalculatorKind, Category, InputSpec, Inputs, SolveMode};
use serde_json::json;

static VOLTAGE_INPUTS: [InputSpec; 2] = [
    InputSpec::number("i", "Current", "A", 2.0),
    InputSpec::number("r", "Resistance", "ohm", 6.0),
];

static CURRENT_INPUTS: [InputSpec; 2] = [
    InputSpec::number("u", "Voltage", "V", 12.0),
    InputSpec::number("r", "Resistance", "ohm", 6.0),
];

static RESISTANCE_INPUTS: [InputSpec; 2] = [
    InputSpec::number("u", "Voltage", "V", 12.0),
    InputSpec::number("i", "Current", "A", 2.0),
];

static MODES: [SolveMode; 3] = [
    SolveMode {
        target: "V",
        label: "Solve for voltage",
        inputs: &VOLTAGE_INPUTS,
        calculate: voltage,
    },
    SolveMode {
        target: "I",
        label: "Solve for current",
        inputs: &CURRENT_INPUTS,
        calculate: current,
    },
    SolveMode {
        target: "R",
        label: "Solve for resistance",
        inputs: &RESISTANCE_INPUTS,
        calculate: resistance,
    },
];

pub const OHMS_LAW: Calculator = Calculator {
    id: "ohms-law",
    title: "Ohm's Law",
    category: Category::Physics,
    description: "Voltage, current, and resistance in a simple circuit",
    icon: "circuit",
    kind: CalculatorKind::MultiMode(&MODES),
};

fn circuit(u: f64, i: f64, r: f64) -> serde_json::Value {
    json!({ "voltage": u, "current": i, "resistance": r })
}

fn voltage(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let i = inputs.number("i")?;
    let r = inputs.non_negative("r")?;
    let u = i * r;
    Ok(CalcResult::number(u, "V")
        .with_step("V = I × R")
        .with_step(format!("V = {} A × {} Ω", i, r))
        .with_step(format!("V = {} V", u))
        .with_diagram(DiagramKind::Circuit, circuit(u, i, r)))
}

fn current(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let u = inputs.number("u")?;
    let r = inputs.number("r")?;
    if r == 0.0 {
        return Err(CalcError::div_zero("resistance"));
    }
    let i = u / r;
    Ok(CalcResult::number(i, "A")
        .with_step("I = V / R")
        .with_step(format!("I = {} V / {} Ω", u, r))
        .with_step(format!("I = {} A", i))
        .with_diagram(DiagramKind::Circuit, circuit(u, i, r)))
}

fn resistance(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let u = inputs.number("u")?;
    let i = inputs.number("i")?;
    if i == 0.0 {
        return Err(CalcError::div_zero("current"));
    }
    let r = u / i;
    Ok(CalcResult::number(r, "ohm")
        .with_step("R = V / I")
        .with_step(format!("R = {} V / {} A", u, i))
        .with_step(format!("R = {} Ω", r))
        .with_diagram(DiagramKind::Circuit, circuit(u, i, r)))
}
