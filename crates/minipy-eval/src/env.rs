//! Variable store for the interpreter.

use crate::value::Value;
use std::collections::BTreeMap;

/// The mapping from identifier to current value.
///
/// One flat scope, live for a single interpreter invocation: the snippet
/// dialect has no block scoping, so a loop variable or in-loop binding is
/// visible to everything that follows. Later assignment overwrites.
#[derive(Debug, Clone, Default)]
pub struct VarStore {
    bindings: BTreeMap<String, Value>,
}

impl VarStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Bind a name, overwriting any previous value.
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Look up a name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
