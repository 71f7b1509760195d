//! Profile service: subject claim sets for token and profile issuance.
//!
//! Sits between the protocol engine and the subject directory. For each
//! profile request it re-reads the subject's live claim set and swaps out
//! over-threshold claim types for distributed-claim pointers.

use crate::error::ClaimsApiError;
use crate::services::partition::partition_claims;
use soteria_core::{Claim, SubjectDirectory};
use std::sync::Arc;

/// Path segment under the provider base URL where claims are redeemed.
const CLAIMS_PATH: &str = "/claims/";

/// Derives the claim set embedded in profile/token responses.
pub struct ProfileService {
    directory: Arc<dyn SubjectDirectory>,
    base_retrieval_url: String,
}

impl ProfileService {
    /// Create a profile service.
    ///
    /// `provider_base_url` is the provider's public base URL (e.g.,
    /// "<https://idp.example.com>"); the per-claim retrieval base is derived
    /// from it once, here, rather than read from ambient request state.
    #[must_use]
    pub fn new(directory: Arc<dyn SubjectDirectory>, provider_base_url: &str) -> Self {
        Self {
            directory,
            base_retrieval_url: format!(
                "{}{CLAIMS_PATH}",
                provider_base_url.trim_end_matches('/')
            ),
        }
    }

    /// The base URL distributed-claim endpoints are derived from.
    #[must_use]
    pub fn base_retrieval_url(&self) -> &str {
        &self.base_retrieval_url
    }

    /// Claim set for a subject's profile: inline claims plus distributed
    /// claim pointers. Returns `None` when the subject is unknown.
    ///
    /// # Errors
    ///
    /// Returns `ClaimsApiError::Internal` if the indirection mappings cannot
    /// be serialized.
    pub async fn profile_claims(
        &self,
        subject_id: &str,
    ) -> Result<Option<Vec<Claim>>, ClaimsApiError> {
        tracing::debug!(subject_id, "Resolving profile claims");
        let Some(subject) = self.directory.find_by_subject_id(subject_id).await else {
            tracing::debug!(subject_id, "Subject not found in directory");
            return Ok(None);
        };

        let partition = partition_claims(&subject.claims, &self.base_retrieval_url);
        let claims = partition.into_claims().map_err(|e| {
            ClaimsApiError::Internal(format!("Failed to encode claim indirection: {e}"))
        })?;
        Ok(Some(claims))
    }

    /// Whether the subject exists and is active. Unknown subjects are
    /// inactive.
    pub async fn is_active(&self, subject_id: &str) -> bool {
        let is_active = self
            .directory
            .find_by_subject_id(subject_id)
            .await
            .is_some_and(|subject| subject.is_active);
        tracing::debug!(subject_id, is_active, "Checked subject active state");
        is_active
    }
}
