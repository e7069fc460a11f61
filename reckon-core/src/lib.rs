//! Reckon Core - Result protocol and error taxonomy
//!
//! Every calculator formula in the workspace returns the same shape: a
//! [`CalcResult`] carrying the computed value, its display unit, an ordered
//! derivation trace, and an optional diagram descriptor for renderers.
//! Failures are values too: [`CalcError`] distinguishes bad input from
//! mathematically undefined computation so callers and tests can tell the
//! two apart instead of seeing a single "nothing happened" state.

mod error;
mod result;
mod value;

pub use error::CalcError;
pub use result::{CalcResult, Diagram, DiagramKind};
pub use value::CalcValue;
