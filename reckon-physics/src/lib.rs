//! Reckon Physics - physics calculator catalog
//!
//! Calculators:
//! - force: Newton's second law, solvable for F, m, or a
//! - kinetic-energy: KE = ½mv², solvable for KE, m, or v
//! - ohms-law: V = IR, solvable for V, I, or R
//! - orbital-velocity: circular orbit speed from central mass and radius

mod circuit;
mod energy;
mod force;
mod orbit;

use reckon_engine::Calculator;

static CATALOG: [Calculator; 4] = [
    force::FORCE,
    energy::KINETIC_ENERGY,
    circuit::OHMS_LAW,
    orbit::ORBITAL_VELOCITY,
];

/// All physics calculators.
pub fn calculators() -> &'static [Calculator] {
    &CATALOG
}
