//! Portfolio user service.
//!
//! Reads return the user with their full project and skill collections, and
//! are deliberately not cached.

use crate::dto::{PortfolioUserRequest, PortfolioUserResponse};
use async_trait::async_trait;
use skillsnap_core::{PortfolioUser, PortfolioUserId, SkillSnapError, SkillSnapResult, ValidateExt};
use skillsnap_repository::{
    NewPortfolioUser, PortfolioUserRepository, ProjectRepository, SkillRepository,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Portfolio user service trait.
#[async_trait]
pub trait PortfolioUserService: Send + Sync {
    /// Lists all portfolio users with their collections.
    async fn list(&self) -> SkillSnapResult<Vec<PortfolioUserResponse>>;

    /// Gets a single portfolio user with their collections.
    async fn get(&self, id: PortfolioUserId) -> SkillSnapResult<PortfolioUserResponse>;

    /// Creates a portfolio user.
    async fn create(&self, request: PortfolioUserRequest) -> SkillSnapResult<PortfolioUserResponse>;

    /// Updates an existing portfolio user.
    async fn update(
        &self,
        id: PortfolioUserId,
        request: PortfolioUserRequest,
    ) -> SkillSnapResult<PortfolioUserResponse>;

    /// Deletes a portfolio user and, via cascade, their projects and skills.
    async fn delete(&self, id: PortfolioUserId) -> SkillSnapResult<()>;
}

/// Portfolio user service implementation.
pub struct PortfolioUserServiceImpl<U, P, S>
where
    U: PortfolioUserRepository,
    P: ProjectRepository,
    S: SkillRepository,
{
    portfolio_user_repository: Arc<U>,
    project_repository: Arc<P>,
    skill_repository: Arc<S>,
}

impl<U, P, S> PortfolioUserServiceImpl<U, P, S>
where
    U: PortfolioUserRepository,
    P: ProjectRepository,
    S: SkillRepository,
{
    /// Creates a new portfolio user service.
    pub fn new(
        portfolio_user_repository: Arc<U>,
        project_repository: Arc<P>,
        skill_repository: Arc<S>,
    ) -> Self {
        Self {
            portfolio_user_repository,
            project_repository,
            skill_repository,
        }
    }

    /// Loads a user's collections concurrently and assembles the response.
    async fn with_collections(&self, user: PortfolioUser) -> SkillSnapResult<PortfolioUserResponse> {
        let (projects, skills) = futures::try_join!(
            self.project_repository.find_by_portfolio_user(user.id),
            self.skill_repository.find_by_portfolio_user(user.id),
        )?;

        Ok(PortfolioUserResponse::from_parts(user, projects, skills))
    }
}

#[async_trait]
impl<U, P, S> PortfolioUserService for PortfolioUserServiceImpl<U, P, S>
where
    U: PortfolioUserRepository + 'static,
    P: ProjectRepository + 'static,
    S: SkillRepository + 'static,
{
    async fn list(&self) -> SkillSnapResult<Vec<PortfolioUserResponse>> {
        debug!("Listing portfolio users");

        let users = self.portfolio_user_repository.find_all().await?;
        let mut responses = Vec::with_capacity(users.len());
        for user in users {
            responses.push(self.with_collections(user).await?);
        }

        Ok(responses)
    }

    async fn get(&self, id: PortfolioUserId) -> SkillSnapResult<PortfolioUserResponse> {
        let user = self
            .portfolio_user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| SkillSnapError::not_found("PortfolioUser", id))?;

        self.with_collections(user).await
    }

    async fn create(&self, request: PortfolioUserRequest) -> SkillSnapResult<PortfolioUserResponse> {
        request.validate_request()?;

        let created = self
            .portfolio_user_repository
            .create(&NewPortfolioUser {
                name: request.name,
                bio: request.bio,
                profile_image_url: request.profile_image_url,
            })
            .await?;

        info!("Portfolio user created: {}", created.id);

        Ok(PortfolioUserResponse::from_parts(created, Vec::new(), Vec::new()))
    }

    async fn update(
        &self,
        id: PortfolioUserId,
        request: PortfolioUserRequest,
    ) -> SkillSnapResult<PortfolioUserResponse> {
        request.validate_request()?;

        let mut user = self
            .portfolio_user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| SkillSnapError::not_found("PortfolioUser", id))?;

        user.update(request.name, request.bio, request.profile_image_url);
        let updated = self.portfolio_user_repository.update(&user).await?;

        info!("Portfolio user updated: {}", updated.id);

        self.with_collections(updated).await
    }

    async fn delete(&self, id: PortfolioUserId) -> SkillSnapResult<()> {
        if !self.portfolio_user_repository.delete(id).await? {
            return Err(SkillSnapError::not_found("PortfolioUser", id));
        }

        info!("Portfolio user deleted: {}", id);
        Ok(())
    }
}
