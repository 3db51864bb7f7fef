//! Skill service with a cached collection read.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{SkillRequest, SkillResponse};
use async_trait::async_trait;
use skillsnap_core::{SkillId, SkillSnapError, SkillSnapResult, ValidateExt};
use skillsnap_repository::{NewSkill, PortfolioUserRepository, SkillRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Skill service trait.
#[async_trait]
pub trait SkillService: Send + Sync {
    /// Lists all skills with their owner's name. Served read-through from the
    /// cache.
    async fn list(&self) -> SkillSnapResult<Vec<SkillResponse>>;

    /// Gets a single skill. Always bypasses the cache.
    async fn get(&self, id: SkillId) -> SkillSnapResult<SkillResponse>;

    /// Creates a skill after checking the owning portfolio user exists.
    async fn create(&self, request: SkillRequest) -> SkillSnapResult<SkillResponse>;

    /// Updates an existing skill.
    async fn update(&self, id: SkillId, request: SkillRequest) -> SkillSnapResult<SkillResponse>;

    /// Deletes a skill.
    async fn delete(&self, id: SkillId) -> SkillSnapResult<()>;
}

/// Skill service implementation.
pub struct SkillServiceImpl<R, U>
where
    R: SkillRepository,
    U: PortfolioUserRepository,
{
    skill_repository: Arc<R>,
    portfolio_user_repository: Arc<U>,
    cache: Arc<dyn CacheInterface>,
}

impl<R, U> SkillServiceImpl<R, U>
where
    R: SkillRepository,
    U: PortfolioUserRepository,
{
    /// Creates a new skill service.
    pub fn new(
        skill_repository: Arc<R>,
        portfolio_user_repository: Arc<U>,
        cache: Arc<dyn CacheInterface>,
    ) -> Self {
        Self {
            skill_repository,
            portfolio_user_repository,
            cache,
        }
    }

    /// Drops the cached skills list after a successful write.
    async fn invalidate_list(&self) -> SkillSnapResult<()> {
        let existed = self.cache.invalidate(cache_keys::SKILLS_LIST).await?;
        debug!("Invalidated skills list cache (existed: {})", existed);
        Ok(())
    }
}

#[async_trait]
impl<R, U> SkillService for SkillServiceImpl<R, U>
where
    R: SkillRepository + 'static,
    U: PortfolioUserRepository + 'static,
{
    async fn list(&self) -> SkillSnapResult<Vec<SkillResponse>> {
        let repository = &self.skill_repository;
        self.cache
            .get_or_fetch(cache_keys::SKILLS_LIST, self.cache.default_ttl(), || async {
                debug!("Fetching skills list from database");
                let rows = repository.find_all_with_owner().await?;
                Ok(rows.into_iter().map(SkillResponse::from).collect())
            })
            .await
    }

    async fn get(&self, id: SkillId) -> SkillSnapResult<SkillResponse> {
        let skill = self
            .skill_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| SkillSnapError::not_found("Skill", id))?;

        Ok(SkillResponse::from(skill))
    }

    async fn create(&self, request: SkillRequest) -> SkillSnapResult<SkillResponse> {
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
            .skill_repository
            .create(&NewSkill {
                name: request.name,
                level: request.level,
                portfolio_user_id: request.portfolio_user_id,
            })
            .await?;

        info!("Skill created: {}", created.id);
        self.invalidate_list().await?;

        Ok(SkillResponse::from(created))
    }

    async fn update(&self, id: SkillId, request: SkillRequest) -> SkillSnapResult<SkillResponse> {
        request.validate_request()?;

        let mut skill = self
            .skill_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| SkillSnapError::not_found("Skill", id))?;

        skill.update(request.name, request.level, request.portfolio_user_id);
        let updated = self.skill_repository.update(&skill).await?;

        info!("Skill updated: {}", updated.id);
        self.invalidate_list().await?;

        Ok(SkillResponse::from(updated))
    }

    async fn delete(&self, id: SkillId) -> SkillSnapResult<()> {
        if !self.skill_repository.delete(id).await? {
            return Err(SkillSnapError::not_found("Skill", id));
        }

        info!("Skill deleted: {}", id);
        self.invalidate_list().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{cache_keys, MemoryCacheService};
    use crate::testing::{CountingSkillRepository, StubPortfolioUserRepository};
    use skillsnap_core::PortfolioUserId;

    fn request(owner: i64) -> SkillRequest {
        SkillRequest {
            name: "Rust".to_string(),
            level: "Expert".to_string(),
            portfolio_user_id: PortfolioUserId::new(owner),
        }
    }

    #[tokio::test]
    async fn test_list_is_served_from_cache() {
        let skills = Arc::new(CountingSkillRepository::new());
        let users = Arc::new(StubPortfolioUserRepository::with_user(1));
        let service =
            SkillServiceImpl::new(skills.clone(), users, Arc::new(MemoryCacheService::new()));

        service.create(request(1)).await.unwrap();
        service.list().await.unwrap();
        service.list().await.unwrap();

        assert_eq!(skills.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_mutations_invalidate_skills_list_only() {
        let skills = Arc::new(CountingSkillRepository::new());
        let users = Arc::new(StubPortfolioUserRepository::with_user(1));
        let cache = Arc::new(MemoryCacheService::new());
        let service = SkillServiceImpl::new(skills.clone(), users, cache.clone());

        // Seed an unrelated cached collection
        cache
            .set_raw(cache_keys::PROJECTS_LIST, "[]", cache.default_ttl())
            .await
            .unwrap();

        let created = service.create(request(1)).await.unwrap();
        service.list().await.unwrap();

        let mut update = request(1);
        update.level = "Intermediate".to_string();
        service.update(created.id, update).await.unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed[0].level, "Intermediate");
        assert_eq!(skills.list_calls(), 2);

        // The projects key was untouched
        assert!(cache
            .get_raw(cache_keys::PROJECTS_LIST)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_create_with_missing_owner_is_validation_error() {
        let skills = Arc::new(CountingSkillRepository::new());
        let users = Arc::new(StubPortfolioUserRepository::with_user(1));
        let service =
            SkillServiceImpl::new(skills.clone(), users, Arc::new(MemoryCacheService::new()));

        let err = service.create(request(42)).await.unwrap_err();
        assert!(matches!(err, SkillSnapError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_failure_propagates_and_next_read_refetches() {
        let skills = Arc::new(CountingSkillRepository::new());
        let users = Arc::new(StubPortfolioUserRepository::with_user(1));
        let service =
            SkillServiceImpl::new(skills.clone(), users, Arc::new(MemoryCacheService::new()));

        skills.fail_next_list();
        assert!(matches!(
            service.list().await.unwrap_err(),
            SkillSnapError::Database(_)
        ));

        service.list().await.unwrap();
        assert_eq!(skills.list_calls(), 2);
    }
}
