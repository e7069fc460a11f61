//! Calculator registry

use crate::{Calculator, Category};
use std::collections::HashMap;

/// Keyed collection of calculator definitions across all domains.
///
/// Lookup returns `None` for an unknown id so callers render a "not
/// available" view instead of failing the whole page.
pub struct CalculatorRegistry {
    by_id: HashMap<&'static str, &'static Calculator>,
}

impl CalculatorRegistry {
    pub fn new() -> Self {
        Self {
            by_id: HashMap::new(),
        }
    }

    pub fn with_calculator(mut self, calculator: &'static Calculator) -> Self {
        debug_assert!(
            !self.by_id.contains_key(calculator.id),
            "calculator id '{}' registered twice",
            calculator.id
        );
        self.by_id.insert(calculator.id, calculator);
        self
    }

    pub fn with_catalog(mut self, catalog: &'static [Calculator]) -> Self {
        for calculator in catalog {
            self = self.with_calculator(calculator);
        }
        self
    }

    pub fn get(&self, id: &str) -> Option<&'static Calculator> {
        self.by_id.get(id).copied()
    }

    /// Calculators in a display category, sorted by title for stable
    /// listings.
    pub fn by_category(&self, category: Category) -> Vec<&'static Calculator> {
        let mut found: Vec<_> = self
            .by_id
            .values()
            .copied()
            .filter(|c| c.category == category)
            .collect();
        found.sort_by_key(|c| c.title);
        found
    }

    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.by_id.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for CalculatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
