//! Ideal gas law: PV = nRT

use reckon_core::{CalcError, CalcResult, DiagramKind};
use reckon_engine::{Calculator, CalculatorKind, Category, InputSpec, Inputs, SolveMode};
use serde_json::json;

/// Gas constant in L·atm/(mol·K).
const R: f64 = 0.0821;

static PRESSURE_INPUTS: [InputSpec; 3] = [
    InputSpec::number("n", "Amount of gas", "mol", 1.0),
    InputSpec::number("t", "Temperature", "K", 298.0),
    InputSpec::number("v", "Volume", "L", 22.4),
];

static VOLUME_INPUTS: [InputSpec; 3] = [
    InputSpec::number("n", "Amount of gas", "mol", 1.0),
    InputSpec::number("t", "Temperature", "K", 298.0),
    InputSpec::number("p", "Pressure", "atm", 1.0),
];

static AMOUNT_INPUTS: [InputSpec; 3] = [
    InputSpec::number("p", "Pressure", "atm", 1.0),
    InputSpec::number("v", "Volume", "L", 22.4),
    InputSpec::number("t", "Temperature", "K", 298.0),
];

static TEMPERATURE_INPUTS: [InputSpec; 3] = [
    InputSpec::number("p", "Pressure", "atm", 1.0),
    InputSpec::number("v", "Volume", "L", 22.4),
    InputSpec::number("n", "Amount of gas", "mol", 1.0),
];

static MODES: [SolveMode; 4] = [
    SolveMode {
        target: "P",
        label: "Solve for pressure",
        inputs: &PRESSURE_INPUTS,
        calculate: pressure,
    },
    SolveMode {
        target: "V",
        label: "Solve for volume",
        inputs: &VOLUME_INPUTS,
        calculate: volume,
    },
    SolveMode {
        target: "n",
        label: "Solve for amount",
        inputs: &AMOUNT_INPUTS,
        calculate: amount,
    },
    SolveMode {
        target: "T",
        label: "Solve for temperature",
        inputs: &TEMPERATURE_INPUTS,
        calculate: temperature,
    },
];

pub const IDEAL_GAS: Calculator = Calculator {
    id: "ideal-gas",
    title: "Ideal Gas Law",
    category: Category::Chemistry,
    description: "PV = nRT with R = 0.0821 L·atm/(mol·K)",
    icon: "gas",
    kind: CalculatorKind::MultiMode(&MODES),
};

fn gas_diagram(p: f64, v: f64, t: f64) -> serde_json::Value {
    json!({ "pressure": p, "volume": v, "temperature": t })
}

fn pressure(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let n = inputs.non_negative("n")?;
    let t = inputs.positive("t")?;
    let v = inputs.positive("v")?;
    let p = n * R * t / v;
    Ok(CalcResult::number(p, "atm")
        .with_step("P = nRT / V")
        .with_step(format!("P = {} mol × {} × {} K / {} L", n, R, t, v))
        .with_step(format!("P = {} atm", p))
        .with_diagram(DiagramKind::Gas, gas_diagram(p, v, t)))
}

fn volume(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let n = inputs.non_negative("n")?;
    let t = inputs.positive("t")?;
    let p = inputs.positive("p")?;
    let v = n * R * t / p;
    Ok(CalcResult::number(v, "L")
        .with_step("V = nRT / P")
        .with_step(format!("V = {} mol × {} × {} K / {} atm", n, R, t, p))
        .with_step(format!("V = {} L", v))
        .with_diagram(DiagramKind::Gas, gas_diagram(p, v, t)))
}

fn amount(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let p = inputs.non_negative("p")?;
    let v = inputs.positive("v")?;
    let t = inputs.positive("t")?;
    let n = p * v / (R * t);
    Ok(CalcResult::number(n, "mol")
        .with_step("n = PV / RT")
        .with_step(format!("n = {} atm × {} L / ({} × {} K)", p, v, R, t))
        .with_step(format!("n = {} mol", n))
        .with_diagram(DiagramKind::Gas, gas_diagram(p, v, t)))
}

fn temperature(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let p = inputs.non_negative("p")?;
    let v = inputs.positive("v")?;
    let n = inputs.positive("n")?;
    let t = p * v / (n * R);
    Ok(CalcResult::number(t, "K")
        .with_step("T = PV / nR")
        .with_step(format!("T = {} atm × {} L / ({} mol × {})", p, v, n, R))
        .with_step(format!("T = {} K", t))
        .with_diagram(DiagramKind::Gas, gas_diagram(p, v, t)))
}
