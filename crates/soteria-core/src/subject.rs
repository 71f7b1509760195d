//! Subject (authenticated principal) type.

use crate::claim::Claim;
use serde::{Deserialize, Serialize};

/// An authenticated principal described by a set of claims.
///
/// Subjects are owned and persisted by a [`SubjectDirectory`]; the claims
/// layer only ever reads them.
///
/// [`SubjectDirectory`]: crate::directory::SubjectDirectory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Opaque subject identifier (the `sub` claim value).
    pub subject_id: String,

    /// Whether the subject is active. Inactive subjects must not receive
    /// tokens from the provider.
    pub is_active: bool,

    /// The subject's full claim set. Order is irrelevant; multi-valued
    /// claim types appear as repeated entries.
    pub claims: Vec<Claim>,
}

impl Subject {
    /// Create an active subject with the given claim set.
    pub fn new(subject_id: impl Into<String>, claims: Vec<Claim>) -> Self {
        Self {
            subject_id: subject_id.into(),
            is_active: true,
            claims,
        }
    }

    /// Mark the subject inactive.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// All claims whose type equals `claim_type` exactly.
    pub fn claims_of_type<'a>(&'a self, claim_type: &'a str) -> impl Iterator<Item = &'a Claim> {
        self.claims
            .iter()
            .filter(move |c| c.claim_type == claim_type)
    }
}
