//! Solve modes

use crate::{InputSpec, Inputs};
use reckon_core::{CalcError, CalcResult};

/// A registered formula. Pure: same inputs always produce the same result,
/// no mutation of the input map or external state.
pub type CalcFn = fn(&Inputs) -> Result<CalcResult, CalcError>;

/// One invertible arrangement of a formula: which variable it solves for,
/// which inputs it needs, and the function that computes it.
#[derive(Clone, Copy)]
pub struct SolveMode {
    /// Name of the target variable this mode solves for (e.g. "P", "M").
    pub target: &'static str,
    /// Human label shown by mode selectors (e.g. "Solve for pressure").
    pub label: &'static str,
    pub inputs: &'static [InputSpec],
    pub calculate: CalcFn,
}

impl std::fmt::Debug for SolveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolveMode")
            .field("target", &self.target)
            .field("label", &self.label)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}
