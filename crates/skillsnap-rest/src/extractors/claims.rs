//! Authenticated account extractor.

use crate::responses::ApiResponse;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use skillsnap_core::{ErrorResponse, SkillSnapError};
use skillsnap_security::Claims;

/// Extractor for authenticated account claims.
///
/// Requires the auth middleware to have validated a bearer token and stored
/// the claims in the request extensions; rejects with 401 otherwise.
pub struct AuthenticatedAccount(pub Claims);

impl std::ops::Deref for AuthenticatedAccount {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for authentication extraction.
pub struct AuthError(SkillSnapError);

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::UNAUTHORIZED);

        let error_response = ErrorResponse::from_error(&self.0);
        let body = Json(ApiResponse::<()>::error(error_response));

        (status, body).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedAccount
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Claims are only present if the middleware validated a token
        let claims = parts.extensions.get::<Claims>().cloned().ok_or_else(|| {
            AuthError(SkillSnapError::Unauthorized(
                "Missing or invalid bearer token".to_string(),
            ))
        })?;

        Ok(AuthenticatedAccount(claims))
    }
}
