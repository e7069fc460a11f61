//! Calculator definitions
//!
//! Two catalog shapes exist: multi-mode scientific calculators where the
//! same quantity can be solved for different target variables, and flat
//! finance/everyday calculators with one fixed input set. Both are modeled
//! as one tagged union, and dispatch depends only on the [`ModeView`]
//! capability, so a flat calculator degrades to a single synthesized mode.

use crate::{CalcFn, InputSpec, SolveMode};
use serde::Serialize;
use std::fmt;

/// Display grouping for catalogs. Not part of a calculator's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Physics,
    Chemistry,
    Geography,
    Finance,
    Conversion,
    Everyday,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Physics => "Physics",
            Category::Chemistry => "Chemistry",
            Category::Geography => "Geography",
            Category::Finance => "Finance",
            Category::Conversion => "Unit Conversion",
            Category::Everyday => "Everyday",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The two catalog shapes.
#[derive(Debug, Clone, Copy)]
pub enum CalculatorKind {
    /// One or more selectable solve modes.
    MultiMode(&'static [SolveMode]),
    /// One fixed input list and one calculate function.
    Flat {
        inputs: &'static [InputSpec],
        calculate: CalcFn,
    },
}

/// A named, categorized calculator definition.
///
/// Definitions are constructed once in static catalogs and never mutated;
/// the registry looks them up by id.
#[derive(Debug, Clone, Copy)]
pub struct Calculator {
    /// Unique, URL-safe identifier (e.g. "ideal-gas").
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// Icon reference for the presentation layer; opaque here.
    pub icon: &'static str,
    pub kind: CalculatorKind,
}

/// Uniform view of one solve mode, regardless of catalog shape.
#[derive(Clone, Copy)]
pub struct ModeView {
    pub target: &'static str,
    pub label: &'static str,
    pub inputs: &'static [InputSpec],
    pub calculate: CalcFn,
}

impl Calculator {
    pub fn mode_count(&self) -> usize {
        match self.kind {
            CalculatorKind::MultiMode(modes) => modes.len(),
            CalculatorKind::Flat { .. } => 1,
        }
    }

    /// The `i`-th solve mode; a flat calculator exposes exactly one, at
    /// index 0, labeled by its title.
    pub fn mode(&self, i: usize) -> Option<ModeView> {
        match self.kind {
            CalculatorKind::MultiMode(modes) => modes.get(i).map(|m| ModeView {
                target: m.target,
                label: m.label,
                inputs: m.inputs,
                calculate: m.calculate,
            }),
            CalculatorKind::Flat { inputs, calculate } => (i == 0).then_some(ModeView {
                target: self.id,
                label: self.title,
                inputs,
                calculate,
            }),
        }
    }

    pub fn modes(&self) -> impl Iterator<Item = ModeView> + '_ {
        (0..self.mode_count()).filter_map(|i| self.mode(i))
    }
}
