//! Circular orbital velocity: v = √(GM / r)

use reckon_core::{CalcError, CalcResult, DiagramKind};
use reckon_engine::{Calculator, CalculatorKind, Category, InputSpec, Inputs};
use serde_json::json;

/// Gravitational constant in m³/(kg·s²).
const G: f64 = 6.674e-11;

static INPUTS: [InputSpec; 2] = [
    // Defaults: Earth mass, ISS orbital radius.
    InputSpec::number("mass", "Central body mass", "kg", 5.972e24),
    InputSpec::number("radius", "Orbital radius", "m", 6.771e6),
];

pub const ORBITAL_VELOCITY: Calculator = Calculator {
    id: "orbital-velocity",
    title: "Orbital Velocity",
    category: Category::Physics,
    description: "Speed of a circular orbit around a central mass",
    icon: "orbit",
    kind: CalculatorKind::Flat {
        inputs: &INPUTS,
        calculate: orbital_velocity,
    },
};

fn orbital_velocity(inputs: &Inputs) -> Result<CalcResult, CalcError> {
    let mass = inputs.positive("mass")?;
    let radius = inputs.positive("radius")?;
    let v = (G * mass / radius).sqrt();
    Ok(CalcResult::number(v, "m/s")
        .with_step("v = √(G × M / r)")
        .with_step(format!("v = √({} × {} kg / {} m)", G, mass, radius))
        .with_step(format!("v = {} m/s", v))
        .with_diagram(
            DiagramKind::Orbit,
            json!({ "radius": radius, "velocity": v }),
        ))
}
