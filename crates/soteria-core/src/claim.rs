//! Claim type shared across the platform.
//!
//! A claim is a typed fact about a subject (e.g., `email`, `group`). Claim
//! types may be multi-valued: a subject simply owns several `Claim` entries
//! with the same `claim_type`.

use serde::{Deserialize, Serialize};

/// Claim value-type markers.
///
/// Values are plain strings unless tagged otherwise; the `JSON` marker flags
/// a value that is itself a JSON-encoded structure (used by the distributed
/// claims indirection entries).
pub mod claim_value_types {
    /// Plain string value (XML Schema marker, matching the OIDC convention).
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// JSON-encoded structured value.
    pub const JSON: &str = "json";
}

/// A single typed claim about a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim type (e.g., "email", "group", "sub").
    #[serde(rename = "type")]
    pub claim_type: String,

    /// Claim value, always carried as a string.
    pub value: String,

    /// Value-type marker; see [`claim_value_types`].
    pub value_type: String,
}

impl Claim {
    /// Create a plain string-valued claim.
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            value_type: claim_value_types::STRING.to_string(),
        }
    }

    /// Create a claim whose value is a JSON-encoded structure.
    pub fn json(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            value_type: claim_value_types::JSON.to_string(),
        }
    }

    /// Whether this claim carries a JSON-encoded structured value.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.value_type == claim_value_types::JSON
    }
}
