//! Access token validation seam.
//!
//! The claims retrieval endpoint consumes validation through the
//! [`TokenValidator`] trait so tests and alternative deployments can plug in
//! their own implementation; [`JwtTokenValidator`] is the RS256-backed one.

use crate::error::AuthError;
use crate::jwt::{decode_token_with_config, ValidationConfig};
use async_trait::async_trait;
use soteria_core::Claim;

/// Validates an opaque bearer token and returns the claim set it carries.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Validate an access token. On success, returns the claims extracted
    /// from the token (including `sub` when present).
    async fn validate_access_token(&self, token: &str) -> Result<Vec<Claim>, AuthError>;
}

/// RS256 JWT access token validator.
#[derive(Debug, Clone)]
pub struct JwtTokenValidator {
    public_key_pem: Vec<u8>,
    config: ValidationConfig,
}

impl JwtTokenValidator {
    /// Create a validator with the default validation config.
    #[must_use]
    pub fn new(public_key_pem: Vec<u8>) -> Self {
        Self {
            public_key_pem,
            config: ValidationConfig::default(),
        }
    }

    /// Create a validator with a custom validation config.
    #[must_use]
    pub fn with_config(public_key_pem: Vec<u8>, config: ValidationConfig) -> Self {
        Self {
            public_key_pem,
            config,
        }
    }
}

#[async_trait]
impl TokenValidator for JwtTokenValidator {
    async fn validate_access_token(&self, token: &str) -> Result<Vec<Claim>, AuthError> {
        let claims = decode_token_with_config(token, &self.public_key_pem, &self.config)?;
        Ok(claims.into_claims())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::TokenClaims;
    use crate::jwt::encode_token;
    use crate::test_keys::{TEST_PRIVATE_KEY, TEST_PUBLIC_KEY};

    #[tokio::test]
    async fn test_validate_access_token_returns_claim_set() {
        let payload = TokenClaims::for_claim_set(
            Some("soteria".to_string()),
            3600,
            &[Claim::new("sub", "u1"), Claim::new("scope", "openid")],
        );
        let token = encode_token(&payload, TEST_PRIVATE_KEY).unwrap();

        let validator = JwtTokenValidator::new(TEST_PUBLIC_KEY.to_vec());
        let claims = validator.validate_access_token(&token).await.unwrap();

        assert!(claims.contains(&Claim::new("sub", "u1")));
        assert!(claims.contains(&Claim::new("scope", "openid")));
    }

    #[tokio::test]
    async fn test_validate_access_token_rejects_garbage() {
        let validator = JwtTokenValidator::new(TEST_PUBLIC_KEY.to_vec());
        let result = validator.validate_access_token("not-a-token").await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_validate_access_token_rejects_expired() {
        let payload =
            TokenClaims::for_claim_set(None, -3600, &[Claim::new("sub", "u1")]);
        let token = encode_token(&payload, TEST_PRIVATE_KEY).unwrap();

        let validator = JwtTokenValidator::new(TEST_PUBLIC_KEY.to_vec());
        let result = validator.validate_access_token(&token).await;

        assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn test_validate_access_token_enforces_issuer_when_configured() {
        let payload = TokenClaims::for_claim_set(
            Some("other-issuer".to_string()),
            3600,
            &[Claim::new("sub", "u1")],
        );
        let token = encode_token(&payload, TEST_PRIVATE_KEY).unwrap();

        let validator = JwtTokenValidator::with_config(
            TEST_PUBLIC_KEY.to_vec(),
            ValidationConfig::default().issuer("soteria"),
        );

        assert!(validator.validate_access_token(&token).await.is_err());
    }
}
