//! Dot-notation navigation into nested config sections.

use super::{ConfigError, ConfigTree};

/// Descends into `tree` along the dotted `key` path.
///
/// `None` or an empty key returns `tree` itself. For `"a.b.c"` the result is
/// `tree["a"]["b"]["c"]`. Every segment must name an existing key of a
/// mapping; the last segment's value is returned whatever its type.
pub fn navigate<'a>(
    tree: &'a ConfigTree,
    key: Option<&str>,
) -> Result<&'a ConfigTree, ConfigError> {
    match key {
        None | Some("") => Ok(tree),
        Some(key) => descend(tree, key, key),
    }
}

fn descend<'a>(
    current: &'a ConfigTree,
    remaining: &str,
    full_key: &str,
) -> Result<&'a ConfigTree, ConfigError> {
    let (segment, rest) = match remaining.split_once('.') {
        Some((segment, rest)) => (segment, Some(rest)),
        None => (remaining, None),
    };

    let value = current
        .as_object()
        .and_then(|table| table.get(segment))
        .ok_or_else(|| ConfigError::NonexistentKey {
            key: full_key.to_string(),
            segment: segment.to_string(),
        })?;

    match rest {
        Some(rest) => descend(value, rest, full_key),
        None => Ok(value),
    }
}
