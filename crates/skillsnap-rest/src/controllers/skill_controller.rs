//! Skill controller.
//!
//! List and single-record reads are public; mutations require a bearer token.

use crate::{
    extractors::AuthenticatedAccount,
    responses::{created, no_content, ok, ApiResult, AppError, CreatedResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use skillsnap_core::SkillId;
use skillsnap_service::{SkillRequest, SkillResponse};
use tracing::debug;

/// Creates the skill router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_skills).post(create_skill))
        .route("/:id", get(get_skill).put(update_skill).delete(delete_skill))
}

/// List all skills. Served from the cache when warm.
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    responses(
        (status = 200, description = "All skills with owner names", body = [SkillResponse])
    )
)]
pub async fn list_skills(State(state): State<AppState>) -> ApiResult<Vec<SkillResponse>> {
    debug!("List skills request");

    let response = state.skill_service.list().await?;
    ok(response)
}

/// Get a skill by ID.
#[utoipa::path(
    get,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = i64, Path, description = "Skill ID")),
    responses(
        (status = 200, description = "Skill", body = SkillResponse),
        (status = 404, description = "Skill not found")
    )
)]
pub async fn get_skill(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<SkillResponse> {
    debug!("Get skill request: {}", id);

    let response = state.skill_service.get(SkillId::new(id)).await?;
    ok(response)
}

/// Create a skill.
#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    security(("bearer_auth" = [])),
    request_body = SkillRequest,
    responses(
        (status = 201, description = "Skill created", body = SkillResponse),
        (status = 400, description = "Validation failed or unknown portfolio user"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_skill(
    State(state): State<AppState>,
    account: AuthenticatedAccount,
    Json(request): Json<SkillRequest>,
) -> CreatedResult<SkillResponse> {
    debug!("Create skill request by {}", account.sub);

    let response = state.skill_service.create(request).await?;
    Ok(created(response))
}

/// Update a skill.
#[utoipa::path(
    put,
    path = "/api/skills/{id}",
    tag = "skills",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Skill ID")),
    request_body = SkillRequest,
    responses(
        (status = 204, description = "Skill updated"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Skill not found")
    )
)]
pub async fn update_skill(
    State(state): State<AppState>,
    account: AuthenticatedAccount,
    Path(id): Path<i64>,
    Json(request): Json<SkillRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update skill request: {} by {}", id, account.sub);

    state.skill_service.update(SkillId::new(id), request).await?;
    Ok(no_content())
}

/// Delete a skill.
#[utoipa::path(
    delete,
    path = "/api/skills/{id}",
    tag = "skills",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Skill ID")),
    responses(
        (status = 204, description = "Skill deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Skill not found")
    )
)]
pub async fn delete_skill(
    State(state): State<AppState>,
    account: AuthenticatedAccount,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete skill request: {} by {}", id, account.sub);

    state.skill_service.delete(SkillId::new(id)).await?;
    Ok(no_content())
}
