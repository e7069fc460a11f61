//! Compound interest future value

use crate::compound_factor;
use reckon_core::{CalcError, CalcResult, DiagramKind};
use reckon_engine::{Calculator, CalculatorKind, Category, InputSpec, Inputs};
use serde_json::json;

static INPUTS: [InputSpec; 4] = [
    InputSpec::number("principal", "Initial deposit", "", 1000.0),
    InputSpec::bounded("rate", "Annual interest rate", "%", 5.0, 0.0, 100.0, 0.05),
    InputSpec::bounded("years", "Duration", "years", 10.0, 1.0, 100.0, 1.0),
    InputSpec::bounded("compounds", "Compounds per year", "", 12.0, 1.0, 365.0, 1.0),
];

pub const COMPOUND_INTEREST: Calculator = Calculator {
    id: "compound-interest",
    title: "Compound Interest",
    category: Category::Finance,
    description: "Future value of a deposit under periodic compounding",
    icon: "chart-line",
    kind: CalculatorKind::Flat {
        inputs: &INPUTS,
        calculate: compound_interest,
    },
};

fn compound_interest(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let principal = inputs.positive("principal")?;
    let rate = inputs.non_negative("rate")? / 100.0;
    let years = inputs.positive("years")?;
    let compounds = inputs.positive("compounds")?;

    let future = principal * compound_factor(rate / compounds, compounds * years);

    // Year-by-year balances for the growth chart.
    let series: Vec<serde_json::Value> = (0..=years.ceil() as u32)
        .map(|year| {
            let balance = principal * compound_factor(rate / compounds, compounds * f64::from(year));
            json!({ "year": year, "balance": balance })
        })
        .collect();

    Ok(CalcResult::number(future, "")
        .with_step("FV = P · (1 + r/m)^(m·t)")
        .with_step(format!(
            "FV = {} × (1 + {}/{})^({} × {})",
            principal, rate, compounds, compounds, years
        ))
        .with_step(format!("FV = {}", future))
        .with_step(format!("interest earned = {}", future - principal))
        .with_diagram(DiagramKind::Line, json!({ "series": series })))
}
