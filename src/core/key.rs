//! Canonical key derivation for extracted messages.

use serde::{Deserialize, Serialize};

/// How catalog keys are derived from message text.
///
/// Both schemes are deterministic and total: the same `(message, namespace)`
/// pair always yields the same key, with no environment dependence. Neither
/// scheme is collision-free; two messages that normalize to the same key are
/// merged into one entry with multiple contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyScheme {
    /// The key is the message text, unchanged. Namespaces are ignored.
    #[default]
    Verbatim,
    /// Lowercase the message and replace spaces with underscores; when a
    /// namespace is configured, prefix with `lowercase(namespace) + "."`.
    Slug,
}

/// Derive the canonical catalog key for a message.
pub fn derive_key(message: &str, namespace: Option<&str>, scheme: KeyScheme) -> String {
    match scheme {
        KeyScheme::Verbatim => message.to_string(),
        KeyScheme::Slug => {
            let slug = message.to_lowercase().replace(' ', "_");
            match namespace {
                Some(ns) => format!("{}.{}", ns.to_lowercase(), slug),
                None => slug,
            }
        }
    }
}
