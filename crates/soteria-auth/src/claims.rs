//! Token claim payload: conversion between claim sets and JWT payloads.
//!
//! A [`TokenClaims`] carries the registered JWT claims (`iss`, `exp`, `iat`,
//! `jti`) plus an open payload map holding the subject's claims. Multi-valued
//! claim types become JSON arrays; claims tagged with the JSON value-type
//! marker embed as parsed JSON rather than as quoted strings.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::map::Entry;
use serde_json::{Map, Value};
use soteria_core::Claim;
use uuid::Uuid;

/// Registered claim names owned by the token envelope. Subject claims with
/// these types are skipped when building a payload so the envelope values
/// stay authoritative.
const REGISTERED_CLAIMS: [&str; 4] = ["iss", "exp", "iat", "jti"];

/// JWT claims: registered envelope claims plus an open payload map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    /// Issuer - who created the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    /// Issued at as Unix timestamp.
    pub iat: i64,

    /// JWT ID - unique identifier for this token.
    pub jti: String,

    /// All other claims, keyed by claim type.
    #[serde(flatten)]
    pub claims: Map<String, Value>,
}

impl TokenClaims {
    /// Build a token payload over a claim set with the given lifetime.
    ///
    /// Claims sharing a type are folded into a JSON array in encounter
    /// order. JSON-typed claim values are embedded as parsed JSON; if a
    /// value fails to parse it is carried as a plain string instead.
    #[must_use]
    pub fn for_claim_set(issuer: Option<String>, lifetime_secs: i64, claims: &[Claim]) -> Self {
        let now = Utc::now().timestamp();
        let mut payload = Map::new();

        for claim in claims {
            if REGISTERED_CLAIMS.contains(&claim.claim_type.as_str()) {
                continue;
            }
            let value = claim_value(claim);
            match payload.entry(claim.claim_type.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(mut slot) => match slot.get_mut() {
                    Value::Array(items) => items.push(value),
                    existing => {
                        let first = existing.take();
                        *existing = Value::Array(vec![first, value]);
                    }
                },
            }
        }

        Self {
            iss: issuer,
            exp: now + lifetime_secs,
            iat: now,
            jti: Uuid::new_v4().to_string(),
            claims: payload,
        }
    }

    /// Check if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Get the subject id (`sub` claim), if present and non-empty.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        match self.claims.get("sub") {
            Some(Value::String(sub)) if !sub.is_empty() => Some(sub),
            _ => None,
        }
    }

    /// Flatten the payload map back into a claim set.
    ///
    /// Arrays expand into one claim per element; scalars become string
    /// claims; objects become JSON-typed claims. The registered envelope
    /// claims are not part of the result.
    #[must_use]
    pub fn into_claims(self) -> Vec<Claim> {
        let mut claims = Vec::new();
        for (claim_type, value) in self.claims {
            match value {
                Value::Array(items) => {
                    for item in items {
                        claims.push(claim_from_value(&claim_type, item));
                    }
                }
                Value::Null => {}
                other => claims.push(claim_from_value(&claim_type, other)),
            }
        }
        claims
    }
}

/// Payload value for a single claim, honoring the JSON value-type marker.
fn claim_value(claim: &Claim) -> Value {
    if claim.is_json() {
        serde_json::from_str(&claim.value).unwrap_or(Value::String(claim.value.clone()))
    } else {
        Value::String(claim.value.clone())
    }
}

/// Claim for a single payload value.
fn claim_from_value(claim_type: &str, value: Value) -> Claim {
    match value {
        Value::String(s) => Claim::new(claim_type, s),
        Value::Bool(b) => Claim::new(claim_type, b.to_string()),
        Value::Number(n) => Claim::new(claim_type, n.to_string()),
        other => Claim::json(claim_type, other.to_string()),
    }
}
