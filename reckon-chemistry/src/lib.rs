//! Reckon Chemistry - chemistry calculator catalog
//!
//! Calculators:
//! - molarity: solve for concentration, moles, or volume
//! - ideal-gas: solve the ideal gas law for P, V, n, or T
//! - limiting-reactant: classify which reactant runs out first

mod gas;
mod molarity;
mod reaction;

use reckon_engine::Calculator;

static CATALOG: [Calculator; 3] = [
    molarity::MOLARITY,
    gas::IDEAL_GAS,
    reaction::LIMITING_REACTANT,
];

/// All chemistry calculators.
pub fn calculators() -> &'static [Calculator] {
    &CATALOG
}
