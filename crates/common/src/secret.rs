//! Secret types for protecting sensitive values from accidental logging.
//!
//! This module re-exports types from the [`secrecy`] crate. Use them for any
//! value that must not reach logs: service keys, access tokens, connection
//! strings that embed credentials.
//!
//! `SecretString` implements `Debug` with redaction, so a struct that derives
//! `Debug` around a secret stays safe to print via `{:?}` or tracing fields.
//! The wrapped value is zeroized on drop and is only reachable through an
//! explicit [`ExposeSecret::expose_secret`] call.
//!
//! # Example
//!
//! ```rust
//! use common::secret::{ExposeSecret, SecretString};
//!
//! #[derive(Debug)]
//! struct ServiceKeys {
//!     project_url: String,
//!     anon_key: SecretString, // Debug shows "[REDACTED]"
//! }
//!
//! let keys = ServiceKeys {
//!     project_url: "https://abc123.supabase.co".to_string(),
//!     anon_key: SecretString::from("anon-key-value"),
//! };
//!
//! // Safe: the key is redacted
//! println!("{keys:?}");
//!
//! // Reading the value requires an explicit expose
//! let raw: &str = keys.anon_key.expose_secret();
//! # assert_eq!(raw, "anon-key-value");
//! ```

// Re-export the main types from secrecy
pub use secrecy::{ExposeSecret, SecretBox, SecretString};
