//! Environment variable helpers.
//!
//! All lookups operate on an explicit variable map so resolution logic can be
//! unit tested without mutating process-global environment state. Callers
//! that want the real environment snapshot it once via [`process_vars`].

use std::collections::HashMap;
use std::env;

/// Snapshot the process environment into a map.
pub fn process_vars() -> HashMap<String, String> {
    env::vars().collect()
}

/// Look up `key`, treating unset and empty values both as absent.
pub fn non_empty(vars: &HashMap<String, String>, key: &str) -> Option<String> {
    vars.get(key).filter(|v| !v.is_empty()).cloned()
}

/// Look up `key`, substituting `default` when the value is unset or empty.
pub fn var_or(vars: &HashMap<String, String>, key: &str, default: &str) -> String {
    non_empty(vars, key).unwrap_or_else(|| default.to_string())
}

/// First non-empty value among `keys`, checked in order.
pub fn first_non_empty(vars: &HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| non_empty(vars, key))
}
