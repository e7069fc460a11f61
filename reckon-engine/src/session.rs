//! Per-session dispatch state
//!
//! A session owns the transient state a UI needs while one calculator is
//! open: the active solve mode, the working input values and selected
//! display units, the latest result, and an ephemeral history list. It is
//! discarded when the hosting session ends; nothing here persists.

use crate::{Calculator, InputKind, InputValue, Inputs, ModeView};
use reckon_core::{CalcError, CalcResult};
use reckon_units::convert;
use std::collections::HashMap;
use tracing::debug;

/// Immutable snapshot taken at save time. Mode switches and later edits
/// never recompute it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub title: String,
    pub result: String,
    pub inputs: String,
}

/// Working state for one open calculator.
pub struct Session {
    calculator: &'static Calculator,
    mode_index: usize,
    values: HashMap<String, InputValue>,
    units: HashMap<String, String>,
    result: Option<CalcResult>,
    last_error: Option<CalcError>,
    history: Vec<HistoryEntry>,
}

impl Session {
    /// Open a calculator with its first mode active and defaults seeded.
    pub fn new(calculator: &'static Calculator) -> Self {
        let mut session = Session {
            calculator,
            mode_index: 0,
            values: HashMap::new(),
            units: HashMap::new(),
            result: None,
            last_error: None,
            history: Vec::new(),
        };
        session.activate(0);
        session
    }

    pub fn calculator(&self) -> &'static Calculator {
        self.calculator
    }

    pub fn mode_index(&self) -> usize {
        self.mode_index
    }

    fn active_mode(&self) -> ModeView {
        // mode_index is only ever set through activate, which validates it.
        self.calculator
            .mode(self.mode_index)
            .unwrap_or_else(|| unreachable!("active mode index out of range"))
    }

    /// Switch to solve mode `i`.
    ///
    /// Resets the working inputs to that mode's own defaults, never to
    /// values left over from a previous mode, even when input names
    /// collide. Clears any previous result. Returns false (leaving the
    /// session untouched) if `i` is out of range.
    pub fn activate(&mut self, i: usize) -> bool {
        let Some(mode) = self.calculator.mode(i) else {
            return false;
        };
        self.mode_index = i;
        self.values.clear();
        self.units.clear();
        for spec in mode.inputs {
            self.values.insert(spec.name.to_string(), spec.default_value());
            if !spec.unit.is_empty() {
                self.units.insert(spec.name.to_string(), spec.unit.to_string());
            }
        }
        self.result = None;
        self.last_error = None;
        true
    }

    pub fn set_value(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), InputValue::Number(value));
    }

    pub fn set_text(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), InputValue::Text(value.to_string()));
    }

    /// Select the display unit for an input. The value itself is kept as
    /// entered; normalization happens at evaluate time.
    pub fn set_unit(&mut self, name: &str, unit: &str) {
        self.units.insert(name.to_string(), unit.to_string());
    }

    /// Normalize inputs, run the active mode's formula, and record the
    /// outcome.
    ///
    /// Every numeric input is converted from its selected display unit to
    /// the spec's canonical unit first. A missing or non-finite required
    /// input, or a value outside the spec's declared min/max bounds, yields
    /// `InvalidInput`; a NaN/infinite numeric result that the formula
    /// failed to guard yields `Degenerate`. Errors are recorded and
    /// returned, never panicked.
    pub fn evaluate(&mut self) -> Result<CalcResult, CalcError> {
        let mode = self.active_mode();
        let outcome = self.run(&mode);
        match &outcome {
            Ok(result) => {
                self.result = Some(result.clone());
                self.last_error = None;
            }
            Err(err) => {
                debug!(
                    calculator = self.calculator.id,
                    target = mode.target,
                    %err,
                    "evaluation produced no result"
                );
                self.result = None;
                self.last_error = Some(err.clone());
            }
        }
        outcome
    }

    fn run(&self, mode: &ModeView) -> Result<CalcResult, CalcError> {
        let mut normalized: HashMap<String, InputValue> = HashMap::new();

        for spec in mode.inputs {
            let raw = self
                .values
                .get(spec.name)
                .cloned()
                .unwrap_or_else(|| spec.default_value());

            match spec.kind {
                InputKind::Number => {
                    let value = match raw {
                        InputValue::Number(n) if n.is_finite() => n,
                        InputValue::Text(ref s) => s
                            .trim()
                            .parse::<f64>()
                            .ok()
                            .filter(|n| n.is_finite())
                            .ok_or_else(|| CalcError::missing(spec.name))?,
                        _ => return Err(CalcError::missing(spec.name)),
                    };
                    let selected = self
                        .units
                        .get(spec.name)
                        .map(String::as_str)
                        .unwrap_or(spec.unit);
                    let base = convert(value, selected, spec.unit);
                    if let Some(min) = spec.min {
                        if base < min {
                            return Err(CalcError::invalid_input(
                                spec.name,
                                format!("must be at least {min}"),
                            ));
                        }
                    }
                    if let Some(max) = spec.max {
                        if base > max {
                            return Err(CalcError::invalid_input(
                                spec.name,
                                format!("must be at most {max}"),
                            ));
                        }
                    }
                    normalized.insert(spec.name.to_string(), InputValue::Number(base));
                }
                InputKind::Text | InputKind::Select => {
                    normalized.insert(spec.name.to_string(), raw);
                }
            }
        }

        let result = (mode.calculate)(&Inputs::new(&normalized))?;
        if result.value.is_non_finite() {
            return Err(CalcError::degenerate(format!(
                "'{}' produced a non-finite value",
                mode.target
            )));
        }
        Ok(result)
    }

    /// Latest successful result, if any.
    pub fn result(&self) -> Option<&CalcResult> {
        self.result.as_ref()
    }

    /// Why the latest evaluation produced no result, if it failed.
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Snapshot the current result into the history list. No-op without a
    /// result.
    pub fn save_to_history(&mut self) {
        let Some(result) = &self.result else {
            return;
        };
        let mode = self.active_mode();
        let inputs = mode
            .inputs
            .iter()
            .map(|spec| {
                let value = self
                    .values
                    .get(spec.name)
                    .cloned()
                    .unwrap_or_else(|| spec.default_value());
                let unit = self
                    .units
                    .get(spec.name)
                    .map(String::as_str)
                    .unwrap_or(spec.unit);
                match value {
                    InputValue::Number(n) => format!("{} = {} {}", spec.label, n, unit),
                    InputValue::Text(s) => format!("{} = {}", spec.label, s),
                }
            })
            .collect::<Vec<_>>()
            .join("; ");

        self.history.push(HistoryEntry {
            title: format!("{} — {}", self.calculator.title, mode.label),
            result: format!("{} {}", result.value, result.unit).trim_end().to_string(),
            inputs,
        });
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CalculatorKind, Category, InputSpec, SolveMode};
    use approx::assert_relative_eq;

    fn speed(inputs: &Inputs) -> Result<CalcResult, CalcError> {
        let d = inputs.number("d")?;
        let t = inputs.positive("t")?;
        Ok(CalcResult::number(d / t, "m/s").with_step(format!("v = {} m / {} s", d, t)))
    }

    fn distance(inputs: &Inputs) -> Result<CalcResult, CalcError> {
        let v = inputs.number("v")?;
        let t = inputs.number("t")?;
        Ok(CalcResult::number(v * t, "m"))
    }

    static SPEED_INPUTS: [InputSpec; 2] = [
        InputSpec::number("d", "Distance", "m", 100.0),
        InputSpec::number("t", "Time", "s", 10.0),
    ];

    static DISTANCE_INPUTS: [InputSpec; 2] = [
        InputSpec::number("v", "Speed", "m/s", 5.0),
        InputSpec::number("t", "Time", "s", 60.0),
    ];

    static MODES: [SolveMode; 2] = [
        SolveMode {
            target: "v",
            label: "Solve for speed",
            inputs: &SPEED_INPUTS,
            calculate: speed,
        },
        SolveMode {
            target: "d",
            label: "Solve for distance",
            inputs: &DISTANCE_INPUTS,
            calculate: distance,
        },
    ];

    static KINEMATICS: Calculator = Calculator {
        id: "kinematics-test",
        title: "Speed & Distance",
        category: Category::Physics,
        description: "",
        icon: "gauge",
        kind: CalculatorKind::MultiMode(&MODES),
    };

    #[test]
    fn test_defaults_are_seeded_on_open() {
        let mut session = Session::new(&KINEMATICS);
        let result = session.evaluate().unwrap();
        assert_relative_eq!(result.value.as_number().unwrap(), 10.0);
        assert_eq!(result.unit, "m/s");
    }

    #[test]
    fn test_unit_normalization_before_dispatch() {
        let mut session = Session::new(&KINEMATICS);
        session.set_value("d", 1.0);
        session.set_unit("d", "km");
        session.set_value("t", 50.0);
        let result = session.evaluate().unwrap();
        assert_relative_eq!(result.value.as_number().unwrap(), 20.0);
    }

    #[test]
    fn test_mode_isolation_on_name_collision() {
        // Both modes have an input named "t" with different defaults.
        let mut session = Session::new(&KINEMATICS);
        session.set_value("t", 2.0);
        session.evaluate().unwrap();

        assert!(session.activate(1));
        let result = session.evaluate().unwrap();
        // Mode 1 uses its own default t = 60, not the 2.0 left behind.
        assert_relative_eq!(result.value.as_number().unwrap(), 300.0);
        assert!(session.activate(5) == false);
    }

    #[test]
    fn test_activate_clears_previous_result() {
        let mut session = Session::new(&KINEMATICS);
        session.evaluate().unwrap();
        assert!(session.result().is_some());
        session.activate(1);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_invalid_input_is_typed_not_thrown() {
        let mut session = Session::new(&KINEMATICS);
        session.set_value("d", f64::NAN);
        let err = session.evaluate().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(session.result().is_none());
        assert_eq!(session.last_error(), Some(&err));
    }

    #[test]
    fn test_degenerate_formula_guard() {
        let mut session = Session::new(&KINEMATICS);
        session.set_value("t", 0.0);
        let err = session.evaluate().unwrap_err();
        assert!(err.is_invalid_input() || err.is_degenerate());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut session = Session::new(&KINEMATICS);
        session.set_value("d", 42.0);
        let first = session.evaluate().unwrap();
        let second = session.evaluate().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_history_is_an_immutable_snapshot() {
        let mut session = Session::new(&KINEMATICS);
        session.evaluate().unwrap();
        session.save_to_history();
        assert_eq!(session.history().len(), 1);
        let saved = session.history()[0].clone();

        // Later edits and mode switches do not retroactively recompute it.
        session.set_value("d", 999.0);
        session.evaluate().unwrap();
        session.activate(1);
        assert_eq!(session.history()[0], saved);
        assert!(saved.result.contains("10"));
    }

    fn identity(inputs: &Inputs) -> Result<CalcResult, CalcError> {
        Ok(CalcResult::number(inputs.number("r")?, "%"))
    }

    static BOUNDED_INPUTS: [InputSpec; 1] =
        [InputSpec::bounded("r", "Rate", "%", 5.0, 0.0, 100.0, 0.5)];

    static BOUNDED: Calculator = Calculator {
        id: "bounded-test",
        title: "Bounded",
        category: Category::Finance,
        description: "",
        icon: "percent",
        kind: CalculatorKind::Flat {
            inputs: &BOUNDED_INPUTS,
            calculate: identity,
        },
    };

    #[test]
    fn test_declared_bounds_are_enforced_before_dispatch() {
        let mut session = Session::new(&BOUNDED);
        session.set_value("r", 150.0);
        assert!(session.evaluate().unwrap_err().is_invalid_input());

        session.set_value("r", -0.5);
        assert!(session.evaluate().unwrap_err().is_invalid_input());

        session.set_value("r", 100.0);
        assert_relative_eq!(session.evaluate().unwrap().value.as_number().unwrap(), 100.0);
    }

    #[test]
    fn test_save_without_result_is_a_no_op() {
        let mut session = Session::new(&KINEMATICS);
        session.set_value("d", f64::NAN);
        let _ = session.evaluate();
        session.save_to_history();
        assert!(session.history().is_empty());
    }
}
