//! Token issuance seam.
//!
//! Counterpart of [`validator`](crate::validator): the retrieval endpoint
//! hands the filtered claim set to a [`TokenIssuer`] and returns the signed
//! artifact verbatim. [`JwtTokenIssuer`] signs compact RS256 JWTs.

use crate::claims::TokenClaims;
use crate::error::AuthError;
use crate::jwt::encode_token;
use async_trait::async_trait;
use soteria_core::Claim;

/// Produces a signed, self-contained token over a claim set.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Issue a signed token wrapping `claims`, valid for `lifetime_secs`
    /// seconds from now.
    async fn issue_token(&self, lifetime_secs: i64, claims: &[Claim]) -> Result<String, AuthError>;
}

/// RS256 JWT token issuer.
#[derive(Debug, Clone)]
pub struct JwtTokenIssuer {
    issuer: String,
    private_key_pem: Vec<u8>,
}

impl JwtTokenIssuer {
    /// Create an issuer that stamps `issuer` as the `iss` claim.
    #[must_use]
    pub fn new(issuer: impl Into<String>, private_key_pem: Vec<u8>) -> Self {
        Self {
            issuer: issuer.into(),
            private_key_pem,
        }
    }
}

#[async_trait]
impl TokenIssuer for JwtTokenIssuer {
    async fn issue_token(&self, lifetime_secs: i64, claims: &[Claim]) -> Result<String, AuthError> {
        let payload =
            TokenClaims::for_claim_set(Some(self.issuer.clone()), lifetime_secs, claims);
        encode_token(&payload, &self.private_key_pem)
    }
}
