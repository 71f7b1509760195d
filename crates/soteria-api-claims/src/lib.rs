//! Distributed-claims API for the soteria identity provider.
//!
//! Implements the OIDC aggregated/distributed claims mechanism:
//!
//! - **Claims partitioning**: claim types with more than
//!   [`MAX_INLINE_CLAIM_COUNT`] values are removed from a subject's inline
//!   claim set and replaced by `_claim_names`/`_claim_sources` pointers at
//!   per-claim retrieval endpoints.
//! - **Claim retrieval**: `GET /claims/{claim}` validates the caller's
//!   bearer token, re-reads the subject from the directory, filters the
//!   claim set to the requested type, and returns it as a signed token.
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::Router;
//! use soteria_api_claims::{claims_router, ClaimsState};
//!
//! let state = ClaimsState::new(directory, validator, issuer, "https://idp.example.com");
//! let app = Router::new().nest("/claims", claims_router(state));
//! ```
//!
//! [`MAX_INLINE_CLAIM_COUNT`]: services::MAX_INLINE_CLAIM_COUNT

pub mod error;
pub mod handlers;
pub mod router;
pub mod services;

pub use error::ClaimsApiError;
pub use handlers::DISTRIBUTED_CLAIM_TOKEN_LIFETIME_SECS;
pub use router::{claims_router, ClaimsState};
pub use services::{
    partition_claims, ClaimPartition, ClaimSource, ProfileService, CLAIM_NAMES, CLAIM_SOURCES,
    MAX_INLINE_CLAIM_COUNT,
};
