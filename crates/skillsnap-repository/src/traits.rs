//! Repository trait definitions and read models.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use skillsnap_core::{
    Account, AccountId, PortfolioUser, PortfolioUserId, Project, ProjectId, Skill, SkillId,
    SkillSnapResult,
};

/// Denormalized summary of an owning portfolio user, populated by list joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: PortfolioUserId,
    pub name: String,
}

/// A project joined with its owner summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectWithOwner {
    pub project: Project,
    pub owner: OwnerSummary,
}

/// A skill joined with its owner summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillWithOwner {
    pub skill: Skill,
    pub owner: OwnerSummary,
}

/// Fields for a portfolio user that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewPortfolioUser {
    pub name: String,
    pub bio: String,
    pub profile_image_url: String,
}

/// Fields for a project that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub portfolio_user_id: PortfolioUserId,
}

/// Fields for a skill that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewSkill {
    pub name: String,
    pub level: String,
    pub portfolio_user_id: PortfolioUserId,
}

/// Auth account repository trait.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Finds an account by ID.
    async fn find_by_id(&self, id: AccountId) -> SkillSnapResult<Option<Account>>;

    /// Finds an account by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> SkillSnapResult<Option<Account>>;

    /// Checks if an email is already registered.
    async fn exists_by_email(&self, email: &str) -> SkillSnapResult<bool>;

    /// Saves a new account.
    async fn save(&self, account: &Account) -> SkillSnapResult<Account>;
}

/// Portfolio user repository trait.
#[async_trait]
pub trait PortfolioUserRepository: Send + Sync {
    /// Lists all portfolio users.
    async fn find_all(&self) -> SkillSnapResult<Vec<PortfolioUser>>;

    /// Finds a portfolio user by ID.
    async fn find_by_id(&self, id: PortfolioUserId) -> SkillSnapResult<Option<PortfolioUser>>;

    /// Checks if a portfolio user exists.
    async fn exists(&self, id: PortfolioUserId) -> SkillSnapResult<bool>;

    /// Inserts a new portfolio user and returns the persisted record.
    async fn create(&self, user: &NewPortfolioUser) -> SkillSnapResult<PortfolioUser>;

    /// Updates an existing portfolio user.
    async fn update(&self, user: &PortfolioUser) -> SkillSnapResult<PortfolioUser>;

    /// Deletes a portfolio user by ID.
    async fn delete(&self, id: PortfolioUserId) -> SkillSnapResult<bool>;
}

/// Project repository trait.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Lists all projects joined with their owner summary.
    async fn find_all_with_owner(&self) -> SkillSnapResult<Vec<ProjectWithOwner>>;

    /// Finds a project by ID.
    async fn find_by_id(&self, id: ProjectId) -> SkillSnapResult<Option<Project>>;

    /// Lists the projects owned by a portfolio user.
    async fn find_by_portfolio_user(
        &self,
        portfolio_user_id: PortfolioUserId,
    ) -> SkillSnapResult<Vec<Project>>;

    /// Inserts a new project and returns the persisted record.
    async fn create(&self, project: &NewProject) -> SkillSnapResult<Project>;

    /// Updates an existing project.
    async fn update(&self, project: &Project) -> SkillSnapResult<Project>;

    /// Deletes a project by ID.
    async fn delete(&self, id: ProjectId) -> SkillSnapResult<bool>;
}

/// Skill repository trait.
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Lists all skills joined with their owner summary.
    async fn find_all_with_owner(&self) -> SkillSnapResult<Vec<SkillWithOwner>>;

    /// Finds a skill by ID.
    async fn find_by_id(&self, id: SkillId) -> SkillSnapResult<Option<Skill>>;

    /// Lists the skills owned by a portfolio user.
    async fn find_by_portfolio_user(
        &self,
        portfolio_user_id: PortfolioUserId,
    ) -> SkillSnapResult<Vec<Skill>>;

    /// Inserts a new skill and returns the persisted record.
    async fn create(&self, skill: &NewSkill) -> SkillSnapResult<Skill>;

    /// Updates an existing skill.
    async fn update(&self, skill: &Skill) -> SkillSnapResult<Skill>;

    /// Deletes a skill by ID.
    async fn delete(&self, id: SkillId) -> SkillSnapResult<bool>;
}
