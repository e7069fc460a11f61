//! Reckon Engine - calculator registry and solve-mode dispatch
//!
//! Calculators are static data: input metadata lives in const-constructible
//! [`InputSpec`] arrays and behavior lives in plain `fn` pointers registered
//! next to them, so the catalog stays serializable while every formula is
//! statically type-checked.
//!
//! The dispatch path is uniform for all of them: a [`Session`] seeds the
//! active mode's defaults, normalizes every numeric input to its canonical
//! unit via `reckon-units`, invokes the formula, and catches anything
//! degenerate at the boundary. Callers always get a value or a typed
//! absence, never a panic.

mod calculator;
mod input;
mod mode;
mod registry;
mod session;

pub use calculator::{Calculator, CalculatorKind, Category, ModeView};
pub use input::{InputKind, InputSpec, InputValue, Inputs};
pub use mode::{CalcFn, SolveMode};
pub use registry::CalculatorRegistry;
pub use session::{HistoryEntry, Session};
