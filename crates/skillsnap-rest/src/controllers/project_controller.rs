//! Project controller.
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
use skillsnap_core::ProjectId;
use skillsnap_service::{ProjectRequest, ProjectResponse};
use tracing::debug;

/// Creates the project router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
}

/// List all projects. Served from the cache when warm.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects with owner names", body = [ProjectResponse])
    )
)]
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Vec<ProjectResponse>> {
    debug!("List projects request");

    let response = state.project_service.list().await?;
    ok(response)
}

/// Get a project by ID.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project", body = ProjectResponse),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<ProjectResponse> {
    debug!("Get project request: {}", id);

    let response = state.project_service.get(ProjectId::new(id)).await?;
    ok(response)
}

/// Create a project.
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    request_body = ProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Validation failed or unknown portfolio user"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    account: AuthenticatedAccount,
    Json(request): Json<ProjectRequest>,
) -> CreatedResult<ProjectResponse> {
    debug!("Create project request by {}", account.sub);

    let response = state.project_service.create(request).await?;
    Ok(created(response))
}

/// Update a project.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Project ID")),
    request_body = ProjectRequest,
    responses(
        (status = 204, description = "Project updated"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    account: AuthenticatedAccount,
    Path(id): Path<i64>,
    Json(request): Json<ProjectRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update project request: {} by {}", id, account.sub);

    state
        .project_service
        .update(ProjectId::new(id), request)
        .await?;
    Ok(no_content())
}

/// Delete a project.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn delete_project(
    State(state): State<AppState>,
    account: AuthenticatedAccount,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete project request: {} by {}", id, account.sub);

    state.project_service.delete(ProjectId::new(id)).await?;
    Ok(no_content())
}
