//! Reckon - parametric calculators over a shared solve engine
//!
//! The workspace splits into a declarative engine (`reckon-engine` driving
//! static [`Calculator`] definitions), a dimensional unit layer
//! (`reckon-units`), per-domain catalogs, and an async TTL-cached currency
//! rate path (`reckon-rates`). This crate assembles the full catalog into
//! one process-wide registry.
//!
//! ```
//! use reckon::{registry, Session};
//!
//! let molarity = registry().get("molarity").unwrap();
//! let mut session = Session::new(molarity);
//! session.set_value("n", 0.5);
//! session.set_value("v", 1.0);
//! let result = session.evaluate().unwrap();
//! assert_eq!(result.value.as_number(), Some(0.5));
//! ```

use std::sync::LazyLock;

pub use reckon_core::{CalcError, CalcResult, CalcValue, Diagram, DiagramKind};
pub use reckon_engine::{
    Calculator, CalculatorKind, CalculatorRegistry, Category, HistoryEntry, InputKind, InputSpec,
    InputValue, ModeView, Session, SolveMode,
};
pub use reckon_rates::{
    CurrencyConverter, HttpRateSource, RateCache, RateError, RateFetcher, RateRequest, RatesDoc,
    TimeSeriesDoc, RATE_TTL,
};
pub use reckon_units::{convert, Dimension, UnitDef};

static REGISTRY: LazyLock<CalculatorRegistry> = LazyLock::new(|| {
    CalculatorRegistry::new()
        .with_catalog(reckon_physics::calculators())
        .with_catalog(reckon_chemistry::calculators())
        .with_catalog(reckon_geo::calculators())
        .with_catalog(reckon_finance::calculators())
});

/// The assembled catalog of every built-in calculator.
pub fn registry() -> &'static CalculatorRegistry {
    &REGISTRY
}
