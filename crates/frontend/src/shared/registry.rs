//! Replaceable components.
//!
//! Downstream code may swap a component implementation by name. Overrides are
//! resolved once when the app is composed, not on every render.

use std::collections::HashMap;

/// Name → implementation table for one kind of component.
#[derive(Debug, Clone)]
pub struct Overrides<F: Copy> {
    entries: HashMap<&'static str, F>,
}

impl<F: Copy> Overrides<F> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn register(mut self, name: &'static str, implementation: F) -> Self {
        self.entries.insert(name, implementation);
        self
    }

    /// The registered override for `name`, or `default`.
    pub fn resolve(&self, name: &str, default: F) -> F {
        self.entries.get(name).copied().unwrap_or(default)
    }
}

impl<F: Copy> Default for Overrides<F> {
    fn default() -> Self {
        Self::new()
    }
}
