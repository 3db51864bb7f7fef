//! Portfolio-related DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skillsnap_core::{rules, PortfolioUser, PortfolioUserId, Project, ProjectId, Skill, SkillId};
use skillsnap_repository::{ProjectWithOwner, SkillWithOwner};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create or update a portfolio user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PortfolioUserRequest {
    #[validate(custom(function = rules::not_blank))]
    pub name: String,

    #[serde(default)]
    pub bio: String,

    #[serde(default)]
    pub profile_image_url: String,
}

/// Request to create or update a project.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProjectRequest {
    #[validate(custom(function = rules::not_blank))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_url: String,

    pub portfolio_user_id: PortfolioUserId,
}

/// Request to create or update a skill.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SkillRequest {
    #[validate(custom(function = rules::not_blank))]
    pub name: String,

    #[serde(default)]
    pub level: String,

    pub portfolio_user_id: PortfolioUserId,
}

/// Project representation returned by the API.
///
/// List reads carry the owner's name; single-record reads leave it unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub portfolio_user_id: PortfolioUserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_user_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            image_url: project.image_url,
            portfolio_user_id: project.portfolio_user_id,
            portfolio_user_name: None,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

impl From<ProjectWithOwner> for ProjectResponse {
    fn from(joined: ProjectWithOwner) -> Self {
        let mut response = Self::from(joined.project);
        response.portfolio_user_name = Some(joined.owner.name);
        response
    }
}

/// Skill representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillResponse {
    pub id: SkillId,
    pub name: String,
    pub level: String,
    pub portfolio_user_id: PortfolioUserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_user_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name,
            level: skill.level,
            portfolio_user_id: skill.portfolio_user_id,
            portfolio_user_name: None,
            created_at: skill.created_at,
            updated_at: skill.updated_at,
        }
    }
}

impl From<SkillWithOwner> for SkillResponse {
    fn from(joined: SkillWithOwner) -> Self {
        let mut response = Self::from(joined.skill);
        response.portfolio_user_name = Some(joined.owner.name);
        response
    }
}

/// Portfolio user representation returned by the API, with collections.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortfolioUserResponse {
    pub id: PortfolioUserId,
    pub name: String,
    pub bio: String,
    pub profile_image_url: String,
    pub projects: Vec<ProjectResponse>,
    pub skills: Vec<SkillResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioUserResponse {
    /// Builds a response from a user and their collections.
    #[must_use]
    pub fn from_parts(user: PortfolioUser, projects: Vec<Project>, skills: Vec<Skill>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            bio: user.bio,
            profile_image_url: user.profile_image_url,
            projects: projects.into_iter().map(ProjectResponse::from).collect(),
            skills: skills.into_iter().map(SkillResponse::from).collect(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
