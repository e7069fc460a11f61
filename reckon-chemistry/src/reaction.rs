//! Limiting reactant classification
//!
//! For a A + b B -> products, the reactant with the smaller moles/coefficient
//! ratio runs out first. The answer is a classification, so the result value
//! is textual.

use reckon_core::{CalcError, CalcResult, DiagramKind};
use reckon_engine::{Calculator, CalculatorKind, Category, InputSpec, Inputs};
use serde_json::json;

static INPUTS: [InputSpec; 4] = [
    InputSpec::number("moles_a", "Moles of reactant A", "mol", 2.0),
    InputSpec::number("coeff_a", "Coefficient of A", "", 1.0),
    InputSpec::number("moles_b", "Moles of reactant B", "mol", 1.0),
    InputSpec::number("coeff_b", "Coefficient of B", "", 1.0),
];

pub const LIMITING_REACTANT: Calculator = Calculator {
    id: "limiting-reactant",
    title: "Limiting Reactant",
    category: Category::Chemistry,
    description: "Which reactant is exhausted first, from moles and stoichiometric coefficients",
    icon: "flask",
    kind: CalculatorKind::Flat {
        inputs: &INPUTS,
        calculate: limiting,
    },
};

fn limiting(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let moles_a = inputs.non_negative("moles_a")?;
    let coeff_a = inputs.positive("coeff_a")?;
    let moles_b = inputs.non_negative("moles_b")?;
    let coeff_b = inputs.positive("coeff_b")?;

    let ratio_a = moles_a / coeff_a;
    let ratio_b = moles_b / coeff_b;

    let verdict = if ratio_a < ratio_b {
        "Reactant A is limiting"
    } else if ratio_b < ratio_a {
        "Reactant B is limiting"
    } else {
        "Stoichiometric mixture: both reactants are consumed exactly"
    };

    Ok(CalcResult::text(verdict, "")
        .with_step(format!("A: {} mol / {} = {}", moles_a, coeff_a, ratio_a))
        .with_step(format!("B: {} mol / {} = {}", moles_b, coeff_b, ratio_b))
        .with_step("the smaller moles/coefficient ratio limits the reaction")
        .with_diagram(
            DiagramKind::Bar,
            json!({ "bars": [
                { "label": "A", "value": ratio_a },
                { "label": "B", "value": ratio_b },
            ]}),
        ))
}
