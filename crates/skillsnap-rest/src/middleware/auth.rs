//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use skillsnap_security::TokenProvider;
use std::sync::Arc;
use tracing::{debug, warn};

/// Authentication middleware state.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub token_provider: Arc<TokenProvider>,
}

impl AuthMiddlewareState {
    /// Creates the middleware state.
    pub fn new(token_provider: Arc<TokenProvider>) -> Self {
        Self { token_provider }
    }
}

/// Authentication middleware that validates bearer tokens.
///
/// Extracts the token from the Authorization header, validates it, and adds
/// the claims to the request extensions. Requests without a valid token pass
/// through without claims; handlers that require auth reject them via the
/// extractor.
pub async fn auth_middleware(
    State(state): State<AuthMiddlewareState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if let Some(auth_header) = auth_header {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            match state.token_provider.validate_token(token) {
                Ok(claims) => {
                    debug!("Authenticated account: {}", claims.sub);
                    request.extensions_mut().insert(claims);
                }
                Err(e) => {
                    warn!("Token validation failed: {}", e);
                }
            }
        }
    }

    next.run(request).await
}
