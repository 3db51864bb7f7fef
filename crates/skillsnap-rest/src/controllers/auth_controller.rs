//! Authentication controller.

use crate::{
    extractors::AuthenticatedAccount,
    responses::{created, ok, ApiResult, CreatedResult},
    state::AppState,
};
use axum::{extract::State, routing::get, routing::post, Json, Router};
use skillsnap_service::{AccountInfo, AuthResponse, LoginRequest, RegisterRequest};
use tracing::debug;

/// Creates the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> CreatedResult<AuthResponse> {
    debug!("Register request");

    let response = state.auth_service.register(request).await?;
    Ok(created(response))
}

/// Log in with email and password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<AuthResponse> {
    debug!("Login request");

    let response = state.auth_service.login(request).await?;
    ok(response)
}

/// Get the currently authenticated account.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current account", body = AccountInfo),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Account no longer exists")
    )
)]
pub async fn me(
    State(state): State<AppState>,
    account: AuthenticatedAccount,
) -> ApiResult<AccountInfo> {
    debug!("Current account request: {}", account.sub);

    let response = state.auth_service.get_current_account(&account).await?;
    ok(response)
}
