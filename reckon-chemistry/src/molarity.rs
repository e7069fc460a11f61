//! Molarity: M = n / V

use reckon_core::{CalcError, CalcResult, DiagramKind};
use reckon_engine::{Calculator, CalculatorKind, Category, InputSpec, Inputs, SolveMode};
use serde_json::json;

static CONCENTRATION_INPUTS: [InputSpec; 2] = [
    InputSpec::number("n", "Moles of solute", "mol", 0.5),
    InputSpec::number("v", "Solution volume", "L", 1.0),
];

static MOLES_INPUTS: [InputSpec; 2] = [
    InputSpec::number("m", "Concentration", "M", 0.5),
    InputSpec::number("v", "Solution volume", "L", 1.0),
];

static VOLUME_INPUTS: [InputSpec; 2] = [
    InputSpec::number("n", "Moles of solute", "mol", 0.5),
    InputSpec::number("m", "Concentration", "M", 0.5),
];

static MODES: [SolveMode; 3] = [
    SolveMode {
        target: "M",
        label: "Solve for concentration",
        inputs: &CONCENTRATION_INPUTS,
        calculate: concentration,
    },
    SolveMode {
        target: "n",
        label: "Solve for moles",
        inputs: &MOLES_INPUTS,
        calculate: moles,
    },
    SolveMode {
        target: "V",
        label: "Solve for volume",
        inputs: &VOLUME_INPUTS,
        calculate: volume,
    },
];

pub const MOLARITY: Calculator = Calculator {
    id: "molarity",
    title: "Molarity",
    category: Category::Chemistry,
    description: "Concentration of a solution from moles of solute and volume",
    icon: "beaker",
    kind: CalculatorKind::MultiMode(&MODES),
};

fn beaker(fill: f64, label: String) -> serde_json::Value {
    json!({ "fill": fill.clamp(0.0, 1.0), "label": label })
}

fn concentration(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let n = inputs.non_negative("n")?;
    let v = inputs.positive("v")?;
    let m = n / v;
    Ok(CalcResult::number(m, "M")
        .with_step("M = n / V")
        .with_step(format!("M = {} mol / {} L", n, v))
        .with_step(format!("M = {} M", m))
        .with_diagram(DiagramKind::Beaker, beaker(m / 2.0, format!("{} M", m))))
}

fn moles(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let m = inputs.non_negative("m")?;
    let v = inputs.positive("v")?;
    let n = m * v;
    Ok(CalcResult::number(n, "mol")
        .with_step("n = M × V")
        .with_step(format!("n = {} M × {} L", m, v))
        .with_step(format!("n = {} mol", n))
        .with_diagram(DiagramKind::Beaker, beaker(m / 2.0, format!("{} mol", n))))
}

fn volume(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let n = inputs.non_negative("n")?;
    let m = inputs.number("m")?;
    if m == 0.0 {
        return Err(CalcError::div_zero("concentration"));
    }
    if m < 0.0 {
        return Err(CalcError::invalid_input("m", "must not be negative"));
    }
    let v = n / m;
    Ok(CalcResult::number(v, "L")
        .with_step("V = n / M")
        .with_step(format!("V = {} mol / {} M", n, m))
        .with_step(format!("V = {} L", v))
        .with_diagram(DiagramKind::Beaker, beaker(m / 2.0, format!("{} L", v))))
}
