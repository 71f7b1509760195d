//! Distributed-claim retrieval endpoint handler.

use crate::error::ClaimsApiError;
use crate::router::ClaimsState;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
};

/// Lifetime of issued distributed-claim tokens, in seconds.
pub const DISTRIBUTED_CLAIM_TOKEN_LIFETIME_SECS: i64 = 300;

/// Redeems one distributed claim type for the token's subject.
///
/// The response body is the signed token produced by the issuer, verbatim.
/// Every authentication failure collapses into a bare `401`.
#[utoipa::path(
    get,
    path = "/claims/{claim}",
    params(
        ("claim" = String, Path, description = "Claim type to redeem"),
    ),
    responses(
        (status = 200, description = "Signed token carrying the requested claims"),
        (status = 401, description = "Missing or invalid access token"),
    ),
    security(("bearerAuth" = [])),
    tag = "Claims"
)]
pub async fn get_claim_handler(
    State(state): State<ClaimsState>,
    Path(claim_type): Path<String>,
    headers: HeaderMap,
) -> Result<String, ClaimsApiError> {
    // Fail before touching the validator or directory when no bearer token
    // is presented
    let token = extract_bearer_token(&headers).ok_or(ClaimsApiError::Unauthenticated)?;

    let token_claims = state
        .token_validator
        .validate_access_token(&token)
        .await
        .map_err(|e| {
            tracing::warn!("Rejected access token on claims endpoint: {e}");
            ClaimsApiError::Unauthenticated
        })?;

    let subject_id = token_claims
        .iter()
        .find(|c| c.claim_type == "sub")
        .map(|c| c.value.as_str())
        .filter(|sub| !sub.is_empty())
        .ok_or(ClaimsApiError::Unauthenticated)?;

    let Some(subject) = state.directory.find_by_subject_id(subject_id).await else {
        tracing::warn!(subject_id, "Access token subject not present in directory");
        return Err(ClaimsApiError::Unauthenticated);
    };

    let requested: Vec<_> = subject.claims_of_type(&claim_type).cloned().collect();

    let artifact = state
        .token_issuer
        .issue_token(DISTRIBUTED_CLAIM_TOKEN_LIFETIME_SECS, &requested)
        .await
        .map_err(|e| ClaimsApiError::Internal(format!("Token issuance failed: {e}")))?;

    Ok(artifact)
}

/// Extract a Bearer token from the Authorization header.
///
/// The scheme prefix is matched literally ("Bearer" followed by a single
/// space, case-sensitive); anything else counts as no token at all.
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let token = headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;

    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer_token_success() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer test-token-123"),
        );

        assert_eq!(
            extract_bearer_token(&headers),
            Some("test-token-123".to_string())
        );
    }

    #[test]
    fn test_extract_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dGVzdDp0ZXN0"),
        );

        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_bearer_token_scheme_is_case_sensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("bearer test-token-123"),
        );

        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_bearer_token_empty_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));

        assert_eq!(extract_bearer_token(&headers), None);
    }
}
