//! Claims API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors surfaced by the distributed-claims API.
///
/// Missing header, malformed header, invalid or expired token, and
/// unresolvable subject all collapse into [`Unauthenticated`] so callers
/// cannot probe which precondition failed. Detail is logged server-side
/// only.
///
/// [`Unauthenticated`]: ClaimsApiError::Unauthenticated
#[derive(Debug, Error)]
pub enum ClaimsApiError {
    /// Caller is not authenticated (missing, malformed, invalid or expired
    /// token, or subject not resolvable).
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClaimsApiError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ClaimsApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref detail) = self {
            tracing::error!("Claims API internal error: {detail}");
        }
        // Empty body: no error detail crosses the boundary
        self.status_code().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ClaimsApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ClaimsApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthenticated_response_has_empty_body() {
        let response = ClaimsApiError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
