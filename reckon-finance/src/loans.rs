//! Amortized loan payment

use crate::compound_factor;
use reckon_core::{CalcError, CalcResult, DiagramKind};
use reckon_engine::{Calculator, CalculatorKind, Category, InputSpec, Inputs};
use serde_json::json;

static INPUTS: [InputSpec; 3] = [
    InputSpec::number("principal", "Loan amount", "", 20000.0),
    InputSpec::bounded("apr", "Annual interest rate", "%", 5.5, 0.0, 100.0, 0.05),
    InputSpec::bounded("years", "Term", "years", 5.0, 0.5, 50.0, 0.5),
];

pub const LOAN_PAYMENT: Calculator = Calculator {
    id: "loan-payment",
    title: "Loan Payment",
    category: Category::Finance,
    description: "Monthly payment and total interest for a fixed-rate amortized loan",
    icon: "coins",
    kind: CalculatorKind::Flat {
        inputs: &INPUTS,
        calculate: loan_payment,
    },
};

fn loan_payment(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let principal = inputs.positive("principal")?;
    let apr = inputs.non_negative("apr")?;
    let years = inputs.positive("years")?;

    let periods = years * 12.0;
    let rate = apr / 100.0 / 12.0;

    // Zero-rate loans amortize linearly.
    let payment = if rate == 0.0 {
        principal / periods
    } else {
        let factor = compound_factor(rate, periods);
        principal * rate * factor / (factor - 1.0)
    };

    let total_paid = payment * periods;
    let total_interest = total_paid - principal;

    Ok(CalcResult::number(payment, "per month")
        .with_step("payment = P · r · (1+r)ⁿ / ((1+r)ⁿ − 1)")
        .with_step(format!(
            "payment = {} × {} × (1+{})^{} / ((1+{})^{} − 1) = {}",
            principal, rate, rate, periods, rate, periods, payment
        ))
        .with_step(format!("total paid = {} × {} = {}", payment, periods, total_paid))
        .with_step(format!("total interest = {} − {} = {}", total_paid, principal, total_interest))
        .with_diagram(
            DiagramKind::Bar,
            json!({ "bars": [
                { "label": "Principal", "value": principal },
                { "label": "Interest", "value": total_interest },
            ]}),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use reckon_engine::Session;

    #[test]
    fn test_reference_loan() {
        // 20 000 at 5.5 % APR over 5 years, monthly amortization.
        let mut session = Session::new(&LOAN_PAYMENT);
        let result = session.evaluate().unwrap();
        let payment = result.value.as_number().unwrap();
        assert_relative_eq!(payment, 382.02, epsilon = 0.01);

        // Total interest = monthly × 60 − 20 000, traced in the steps.
        let total_interest = payment * 60.0 - 20000.0;
        assert_relative_eq!(total_interest, 2921.4, epsilon = 1.0);
        assert!(result.steps.iter().any(|s| s.starts_with("total interest")));
    }

    #[test]
    fn test_zero_rate_amortizes_linearly() {
        let mut session = Session::new(&LOAN_PAYMENT);
        session.set_value("principal", 1200.0);
        session.set_value("apr", 0.0);
        session.set_value("years", 1.0);
        let result = session.evaluate().unwrap();
        assert_relative_eq!(result.value.as_number().unwrap(), 100.0);
    }

    #[test]
    fn test_non_positive_principal_is_invalid() {
        let mut session = Session::new(&LOAN_PAYMENT);
        session.set_value("principal", 0.0);
        assert!(session.evaluate().unwrap_err().is_invalid_input());
    }
}
