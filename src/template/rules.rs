//! Configurable token delimiters for the template engine.

use serde::{Deserialize, Serialize};

/// Default token prefix delimiter (`##`).
fn default_prefix() -> String {
    "##".to_string()
}

/// Default token suffix delimiter (`##`).
fn default_suffix() -> String {
    "##".to_string()
}

/// Delimiters that bracket a token within a template.
///
/// A token is the shortest substring enclosed by [`prefix`](TokenRules::prefix)
/// and [`suffix`](TokenRules::suffix). Both default to `##`, so `##name##` is a
/// token under the default rules.
///
/// The type is serde-deserializable with per-field defaults so embedders can
/// load delimiters from configuration and omit either field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRules {
    /// Opening delimiter (must be non-empty).
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Closing delimiter (must be non-empty).
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl TokenRules {
    /// Build rules from explicit prefix and suffix delimiters.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

impl Default for TokenRules {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            suffix: default_suffix(),
        }
    }
}
