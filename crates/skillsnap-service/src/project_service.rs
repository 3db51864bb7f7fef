//! Project service with a cached collection read.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{ProjectRequest, ProjectResponse};
use async_trait::async_trait;
use skillsnap_core::{ProjectId, SkillSnapError, SkillSnapResult, ValidateExt};
use skillsnap_repository::{NewProject, PortfolioUserRepository, ProjectRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Project service trait.
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Lists all projects with their owner's name. Served read-through from
    /// the cache.
    async fn list(&self) -> SkillSnapResult<Vec<ProjectResponse>>;

    /// Gets a single project. Always bypasses the cache.
    async fn get(&self, id: ProjectId) -> SkillSnapResult<ProjectResponse>;

    /// Creates a project after checking the owning portfolio user exists.
    async fn create(&self, request: ProjectRequest) -> SkillSnapResult<ProjectResponse>;

    /// Updates an existing project.
    async fn update(&self, id: ProjectId, request: ProjectRequest)
        -> SkillSnapResult<ProjectResponse>;

    /// Deletes a project.
    async fn delete(&self, id: ProjectId) -> SkillSnapResult<()>;
}

/// Project service implementation.
pub struct ProjectServiceImpl<R, U>
where
    R: ProjectRepository,
    U: PortfolioUserRepository,
{
    project_repository: Arc<R>,
    portfolio_user_repository: Arc<U>,
    cache: Arc<dyn CacheInterface>,
}

impl<R, U> ProjectServiceImpl<R, U>
where
    R: ProjectRepository,
    U: PortfolioUserRepository,
{
    /// Creates a new project service.
    pub fn new(
        project_repository: Arc<R>,
        portfolio_user_repository: Arc<U>,
        cache: Arc<dyn CacheInterface>,
    ) -> Self {
        Self {
            project_repository,
            portfolio_user_repository,
            cache,
        }
    }

    /// Drops the cached projects list after a successful write.
    async fn invalidate_list(&self) -> SkillSnapResult<()> {
        let existed = self.cache.invalidate(cache_keys::PROJECTS_LIST).await?;
        debug!("Invalidated projects list cache (existed: {})", existed);
        Ok(())
    }
}

#[async_trait]
impl<R, U> ProjectService for ProjectServiceImpl<R, U>
where
    R: ProjectRepository + 'static,
    U: PortfolioUserRepository + 'static,
{
    async fn list(&self) -> SkillSnapResult<Vec<ProjectResponse>> {
        let repository = &self.project_repository;
        self.cache
            .get_or_fetch(cache_keys::PROJECTS_LIST, self.cache.default_ttl(), || async {
                debug!("Fetching projects list from database");
                let rows = repository.find_all_with_owner().await?;
                Ok(rows.into_iter().map(ProjectResponse::from).collect())
            })
            .await
    }

    async fn get(&self, id: ProjectId) -> SkillSnapResult<ProjectResponse> {
        let project = self
            .project_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| SkillSnapError::not_found("Project", id))?;

        Ok(ProjectResponse::from(project))
    }

    async fn create(&self, request: ProjectRequest) -> SkillSnapResult<ProjectResponse> {
        request.validate_request()?;

        if !self
            .portfolio_user_repository
            .exists(request.portfolio_user_id)
            .await?
        {
            return Err(SkillSnapError::Validation(format!(
                "Portfolio user {} does not exist",
                request.portfolio_user_id
            )));
        }

        let created = self
            .project_repository
            .create(&NewProject {
                title: request.title,
                description: request.description,
                image_url: request.image_url,
                portfolio_user_id: request.portfolio_user_id,
            })
            .await?;

        info!("Project created: {}", created.id);
        self.invalidate_list().await?;

        Ok(ProjectResponse::from(created))
    }

    async fn update(
        &self,
        id: ProjectId,
        request: ProjectRequest,
    ) -> SkillSnapResult<ProjectResponse> {
        request.validate_request()?;

        let mut project = self
            .project_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| SkillSnapError::not_found("Project", id))?;

        project.update(
            request.title,
            request.description,
            request.image_url,
            request.portfolio_user_id,
        );
        let updated = self.project_repository.update(&project).await?;

        info!("Project updated: {}", updated.id);
        self.invalidate_list().await?;

        Ok(ProjectResponse::from(updated))
    }

    async fn delete(&self, id: ProjectId) -> SkillSnapResult<()> {
        if !self.project_repository.delete(id).await? {
            return Err(SkillSnapError::not_found("Project", id));
        }

        info!("Project deleted: {}", id);
        self.invalidate_list().await?;

        Ok(())
    }
}
