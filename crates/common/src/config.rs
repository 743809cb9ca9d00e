//! Runtime configuration for Storyline client components.
//!
//! Configuration is resolved exactly once at startup and passed to consumers
//! by reference. There is no process-global snapshot and nothing re-reads the
//! environment after construction; changing a value requires restarting the
//! process with different environment input.

use std::collections::HashMap;
use std::env;

use tracing::debug;

use crate::env::var_or;
use crate::secret::SecretString;

/// Fallback API base URL when `EXPO_PUBLIC_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Fallback deployment label when `EXPO_PUBLIC_ENV` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Immutable configuration snapshot for client components.
///
/// Resolved values are taken as-is: no URL well-formedness or key format
/// checks happen here. A malformed value surfaces as a connection failure in
/// whichever component dials it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Storyline HTTP API.
    pub api_base_url: String,
    /// Supabase project URL. Empty when the deployment has none configured.
    pub supabase_url: String,
    /// Supabase anonymous key. `Debug` output is redacted.
    pub supabase_anon_key: SecretString,
    /// Human-readable deployment label ("development", "staging", ...).
    pub environment: String,
}

impl ClientConfig {
    /// Resolve configuration from the process environment.
    ///
    /// Never fails: every setting carries a static fallback, so missing or
    /// empty variables degrade to defaults instead of erroring.
    pub fn from_env() -> Self {
        Self::from_vars(&env::vars().collect())
    }

    /// Resolve configuration from an explicit variable map (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let config = Self {
            api_base_url: var_or(vars, "EXPO_PUBLIC_API_BASE_URL", DEFAULT_API_BASE_URL),
            supabase_url: var_or(vars, "EXPO_PUBLIC_SUPABASE_URL", ""),
            supabase_anon_key: SecretString::from(var_or(
                vars,
                "EXPO_PUBLIC_SUPABASE_ANON_KEY",
                "",
            )),
            environment: var_or(vars, "EXPO_PUBLIC_ENV", DEFAULT_ENVIRONMENT),
        };

        debug!(
            environment = %config.environment,
            api_base_url = %config.api_base_url,
            "Client configuration resolved"
        );

        config
    }

    /// Whether this snapshot was resolved for local development.
    pub fn is_development(&self) -> bool {
        self.environment == DEFAULT_ENVIRONMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::ExposeSecret;

    #[test]
    fn test_from_vars_all_defaults() {
        let config = ClientConfig::from_vars(&HashMap::new());

        assert_eq!(config.api_base_url, "http://localhost:3000/api/v1");
        assert_eq!(config.supabase_url, "");
        assert_eq!(config.supabase_anon_key.expose_secret(), "");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_from_vars_full_override() {
        let vars = HashMap::from([
            (
                "EXPO_PUBLIC_API_BASE_URL".to_string(),
                "https://api.storyline.app/api/v1".to_string(),
            ),
            (
                "EXPO_PUBLIC_SUPABASE_URL".to_string(),
                "https://abc123.supabase.co".to_string(),
            ),
            (
                "EXPO_PUBLIC_SUPABASE_ANON_KEY".to_string(),
                "anon-key-value".to_string(),
            ),
            ("EXPO_PUBLIC_ENV".to_string(), "production".to_string()),
        ]);

        let config = ClientConfig::from_vars(&vars);

        assert_eq!(config.api_base_url, "https://api.storyline.app/api/v1");
        assert_eq!(config.supabase_url, "https://abc123.supabase.co");
        assert_eq!(config.supabase_anon_key.expose_secret(), "anon-key-value");
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_from_vars_environment_only() {
        // Overriding one setting must leave the other defaults untouched.
        let vars = HashMap::from([("EXPO_PUBLIC_ENV".to_string(), "staging".to_string())]);

        let config = ClientConfig::from_vars(&vars);

        assert_eq!(config.environment, "staging");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.supabase_url, "");
        assert_eq!(config.supabase_anon_key.expose_secret(), "");
    }

    #[test]
    fn test_from_vars_empty_value_falls_back() {
        let vars = HashMap::from([
            ("EXPO_PUBLIC_API_BASE_URL".to_string(), String::new()),
            ("EXPO_PUBLIC_ENV".to_string(), String::new()),
        ]);

        let config = ClientConfig::from_vars(&vars);

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
    }

    #[test]
    fn test_debug_redacts_anon_key() {
        let vars = HashMap::from([(
            "EXPO_PUBLIC_SUPABASE_ANON_KEY".to_string(),
            "very-secret-anon-key".to_string(),
        )]);

        let config = ClientConfig::from_vars(&vars);
        let debug_str = format!("{config:?}");

        assert!(!debug_str.contains("very-secret-anon-key"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn test_is_development() {
        let dev = ClientConfig::from_vars(&HashMap::new());
        assert!(dev.is_development());

        let vars = HashMap::from([("EXPO_PUBLIC_ENV".to_string(), "staging".to_string())]);
        let staging = ClientConfig::from_vars(&vars);
        assert!(!staging.is_development());
    }
}
