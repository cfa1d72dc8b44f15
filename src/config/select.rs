//! Selection of named parameters from a config scope.

use serde_json::{Map, Value};

use super::{ConfigError, ConfigTree};

/// Separator between names in a parameter list, e.g. `"a, b, c"`.
///
/// Splitting is strict: `"a,b"` is the single name `a,b`, and surrounding
/// whitespace is kept.
pub const PARAMETER_SEPARATOR: &str = ", ";

/// Splits a parameter list into its names. An empty list has no names.
pub fn parameter_names(parameters: &str) -> Vec<&str> {
    if parameters.is_empty() {
        return Vec::new();
    }
    parameters.split(PARAMETER_SEPARATOR).collect()
}

/// Extracts the parameters named in `parameters` from the `scope` mapping.
///
/// Returns an empty map when `parameters` is absent or empty. Fails on the first
/// name missing from `scope`, in which case nothing is selected.
pub fn select_parameters(
    scope: &ConfigTree,
    parameters: Option<&str>,
) -> Result<Map<String, Value>, ConfigError> {
    let names = parameter_names(parameters.unwrap_or_default());
    let mut selected = Map::new();

    for name in names {
        let value = scope
            .as_object()
            .and_then(|table| table.get(name))
            .ok_or_else(|| ConfigError::NonexistentParameter(name.to_string()))?;
        selected.insert(name.to_string(), value.clone());
    }

    Ok(selected)
}
