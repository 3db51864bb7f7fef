//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the REST API.

use skillsnap_core::{AccountId, ErrorResponse, FieldError, PortfolioUserId, ProjectId, SkillId};
use skillsnap_service::{
    AccountInfo, AuthResponse, LoginRequest, PortfolioUserRequest, PortfolioUserResponse,
    ProjectRequest, ProjectResponse, RegisterRequest, SkillRequest, SkillResponse,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the SkillSnap API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SkillSnap API",
        version = "1.0.0",
        description = "Portfolio showcase API for users, projects and skills",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Auth endpoints
        crate::controllers::auth_controller::register,
        crate::controllers::auth_controller::login,
        crate::controllers::auth_controller::me,
        // Portfolio user endpoints
        crate::controllers::portfolio_user_controller::list_portfolio_users,
        crate::controllers::portfolio_user_controller::get_portfolio_user,
        crate::controllers::portfolio_user_controller::create_portfolio_user,
        crate::controllers::portfolio_user_controller::update_portfolio_user,
        crate::controllers::portfolio_user_controller::delete_portfolio_user,
        // Project endpoints
        crate::controllers::project_controller::list_projects,
        crate::controllers::project_controller::get_project,
        crate::controllers::project_controller::create_project,
        crate::controllers::project_controller::update_project,
        crate::controllers::project_controller::delete_project,
        // Skill endpoints
        crate::controllers::skill_controller::list_skills,
        crate::controllers::skill_controller::get_skill,
        crate::controllers::skill_controller::create_skill,
        crate::controllers::skill_controller::update_skill,
        crate::controllers::skill_controller::delete_skill,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            AccountId,
            PortfolioUserId,
            ProjectId,
            SkillId,
            ErrorResponse,
            FieldError,
            // Auth DTOs
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            AccountInfo,
            // Portfolio DTOs
            PortfolioUserRequest,
            PortfolioUserResponse,
            ProjectRequest,
            ProjectResponse,
            SkillRequest,
            SkillResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "portfolio-users", description = "Portfolio user endpoints"),
        (name = "projects", description = "Project endpoints"),
        (name = "skills", description = "Skill endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for JWT Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token authentication"))
                        .build(),
                ),
            );
        }
    }
}
