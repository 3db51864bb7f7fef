//! Portfolio user controller.
//!
//! Mirrors the public portfolio surface: no auth and no caching on any of
//! these routes.

use crate::{
    responses::{created, no_content, ok, ApiResult, AppError, CreatedResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use skillsnap_core::PortfolioUserId;
use skillsnap_service::{PortfolioUserRequest, PortfolioUserResponse};
use tracing::debug;

/// Creates the portfolio user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_portfolio_users).post(create_portfolio_user))
        .route(
            "/:id",
            get(get_portfolio_user)
                .put(update_portfolio_user)
                .delete(delete_portfolio_user),
        )
}

/// List all portfolio users with their projects and skills.
#[utoipa::path(
    get,
    path = "/api/portfoliousers",
    tag = "portfolio-users",
    responses(
        (status = 200, description = "All portfolio users", body = [PortfolioUserResponse])
    )
)]
pub async fn list_portfolio_users(
    State(state): State<AppState>,
) -> ApiResult<Vec<PortfolioUserResponse>> {
    debug!("List portfolio users request");

    let response = state.portfolio_user_service.list().await?;
    ok(response)
}

/// Get a portfolio user by ID.
#[utoipa::path(
    get,
    path = "/api/portfoliousers/{id}",
    tag = "portfolio-users",
    params(("id" = i64, Path, description = "Portfolio user ID")),
    responses(
        (status = 200, description = "Portfolio user", body = PortfolioUserResponse),
        (status = 404, description = "Portfolio user not found")
    )
)]
pub async fn get_portfolio_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<PortfolioUserResponse> {
    debug!("Get portfolio user request: {}", id);

    let response = state
        .portfolio_user_service
        .get(PortfolioUserId::new(id))
        .await?;
    ok(response)
}

/// Create a portfolio user.
#[utoipa::path(
    post,
    path = "/api/portfoliousers",
    tag = "portfolio-users",
    request_body = PortfolioUserRequest,
    responses(
        (status = 201, description = "Portfolio user created", body = PortfolioUserResponse),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_portfolio_user(
    State(state): State<AppState>,
    Json(request): Json<PortfolioUserRequest>,
) -> CreatedResult<PortfolioUserResponse> {
    debug!("Create portfolio user request");

    let response = state.portfolio_user_service.create(request).await?;
    Ok(created(response))
}

/// Update a portfolio user.
#[utoipa::path(
    put,
    path = "/api/portfoliousers/{id}",
    tag = "portfolio-users",
    params(("id" = i64, Path, description = "Portfolio user ID")),
    request_body = PortfolioUserRequest,
    responses(
        (status = 204, description = "Portfolio user updated"),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Portfolio user not found")
    )
)]
pub async fn update_portfolio_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<PortfolioUserRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update portfolio user request: {}", id);

    state
        .portfolio_user_service
        .update(PortfolioUserId::new(id), request)
        .await?;
    Ok(no_content())
}

/// Delete a portfolio user.
#[utoipa::path(
    delete,
    path = "/api/portfoliousers/{id}",
    tag = "portfolio-users",
    params(("id" = i64, Path, description = "Portfolio user ID")),
    responses(
        (status = 204, description = "Portfolio user deleted"),
        (status = 404, description = "Portfolio user not found")
    )
)]
pub async fn delete_portfolio_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete portfolio user request: {}", id);

    state
        .portfolio_user_service
        .delete(PortfolioUserId::new(id))
        .await?;
    Ok(no_content())
}
