//! Claims API router configuration.
//!
//! Configures the distributed-claim retrieval route:
//! - GET /claims/:claim - Redeem one claim type (bearer-token protected)

use crate::handlers::get_claim_handler;
use crate::services::ProfileService;
use axum::{routing::get, Router};
use soteria_auth::{TokenIssuer, TokenValidator};
use soteria_core::SubjectDirectory;
use std::sync::Arc;

/// Application state for the distributed-claims routes.
#[derive(Clone)]
pub struct ClaimsState {
    /// Subject directory (system of record for subjects).
    pub directory: Arc<dyn SubjectDirectory>,
    /// Access token validator.
    pub token_validator: Arc<dyn TokenValidator>,
    /// Signed-token issuer for redeemed claim sets.
    pub token_issuer: Arc<dyn TokenIssuer>,
    /// Profile service (claims partitioning for the issuance flow).
    pub profile_service: Arc<ProfileService>,
}

impl ClaimsState {
    /// Create a new claims state.
    ///
    /// # Arguments
    ///
    /// * `directory` - Subject directory
    /// * `token_validator` - Access token validator
    /// * `token_issuer` - Token issuer for redeemed claim sets
    /// * `provider_base_url` - Provider base URL (e.g., "<https://idp.example.com>");
    ///   distributed-claim endpoints are derived from it
    #[must_use]
    pub fn new(
        directory: Arc<dyn SubjectDirectory>,
        token_validator: Arc<dyn TokenValidator>,
        token_issuer: Arc<dyn TokenIssuer>,
        provider_base_url: &str,
    ) -> Self {
        let profile_service = Arc::new(ProfileService::new(
            Arc::clone(&directory),
            provider_base_url,
        ));
        Self {
            directory,
            token_validator,
            token_issuer,
            profile_service,
        }
    }
}

/// Create the distributed-claims router.
///
/// Mount under `/claims` at the root level so the route paths line up with
/// the endpoints the partitioner writes into `_claim_sources`.
pub fn claims_router(state: ClaimsState) -> Router {
    Router::new()
        .route("/:claim", get(get_claim_handler))
        .with_state(state)
}
