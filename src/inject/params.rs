use std::sync::Arc;

use serde_json::{Map, Value};

use crate::call::Args;

/// Parameter values selected from a config file, fixed once decoration is done.
///
/// Cloning is cheap and every clone sees the same values. Nothing can modify
/// the mapping after construction; per-call filtering always produces a new map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InjectedParameters {
    values: Arc<Map<String, Value>>,
}

impl InjectedParameters {
    /// Freezes `values` as the parameters to inject.
    pub fn new(values: Map<String, Value>) -> Self {
        Self {
            values: Arc::new(values),
        }
    }

    /// The injected value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Number of injected parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Injected parameter names, in the order they were requested.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The injected values still applicable to `args`: every entry whose name
    /// the caller did not pass explicitly.
    pub fn effective_for(&self, args: &Args) -> Map<String, Value> {
        self.values
            .iter()
            .filter(|(name, _)| !args.contains_named(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}
