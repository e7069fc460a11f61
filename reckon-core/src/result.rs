//! The result protocol
//!
//! `{value, unit, steps, diagram?}` is the one shape every calculation
//! returns. `steps` is an append-only, human-readable derivation trace; the
//! engine produces it in order and never validates or reorders it. The
//! diagram payload is opaque to the engine and merely forwarded to the
//! rendering layer.

use crate::CalcValue;
use serde::{Deserialize, Serialize};

/// Closed set of visualization archetypes known to renderers.
///
/// Adding a new visualization means adding a variant here and teaching the
/// external renderer about it; the engine itself stays agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramKind {
    Beaker,
    Gas,
    Gauge,
    Orbit,
    Circuit,
    Bar,
    Line,
    Map,
    Scale,
}

/// Structured diagram descriptor attached to a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub kind: DiagramKind,
    /// Renderer payload; the engine never interprets it.
    pub data: serde_json::Value,
}

impl Diagram {
    pub fn new(kind: DiagramKind, data: serde_json::Value) -> Self {
        Diagram { kind, data }
    }
}

/// A completed calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcResult {
    pub value: CalcValue,
    pub unit: String,
    /// Ordered derivation narrative, may be empty.
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram: Option<Diagram>,
}

impl CalcResult {
    /// Quantitative result.
    pub fn number(value: f64, unit: impl Into<String>) -> Self {
        CalcResult {
            value: CalcValue::Number(value),
            unit: unit.into(),
            steps: Vec::new(),
            diagram: None,
        }
    }

    /// Qualitative/classification result (unit is usually empty).
    pub fn text(value: impl Into<String>, unit: impl Into<String>) -> Self {
        CalcResult {
            value: CalcValue::Text(value.into()),
            unit: unit.into(),
            steps: Vec::new(),
            diagram: None,
        }
    }

    /// Append one derivation step.
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Append several derivation steps in order.
    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.extend(steps.into_iter().map(Into::into));
        self
    }

    pub fn with_diagram(mut self, kind: DiagramKind, data: serde_json::Value) -> Self {
        self.diagram = Some(Diagram::new(kind, data));
        self
    }
}
