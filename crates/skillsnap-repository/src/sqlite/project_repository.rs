//! SQLite project repository implementation.

use crate::{
    traits::{NewProject, OwnerSummary, ProjectRepository, ProjectWithOwner},
    DatabasePool,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use skillsnap_core::{PortfolioUserId, Project, ProjectId, SkillSnapError, SkillSnapResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite project repository implementation.
#[derive(Clone)]
pub struct SqliteProjectRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteProjectRepository {
    /// Creates a new SQLite project repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a project.
#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    title: String,
    description: String,
    image_url: String,
    portfolio_user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: ProjectId::new(row.id),
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            portfolio_user_id: PortfolioUserId::new(row.portfolio_user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Project row joined with its owner's name.
#[derive(Debug, FromRow)]
struct ProjectWithOwnerRow {
    id: i64,
    title: String,
    description: String,
    image_url: String,
    portfolio_user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_name: String,
}

impl From<ProjectWithOwnerRow> for ProjectWithOwner {
    fn from(row: ProjectWithOwnerRow) -> Self {
        Self {
            owner: OwnerSummary {
                id: PortfolioUserId::new(row.portfolio_user_id),
                name: row.owner_name,
            },
            project: Project {
                id: ProjectId::new(row.id),
                title: row.title,
                description: row.description,
                image_url: row.image_url,
                portfolio_user_id: PortfolioUserId::new(row.portfolio_user_id),
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

const SELECT_COLUMNS: &str =
    "id, title, description, image_url, portfolio_user_id, created_at, updated_at";

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    async fn find_all_with_owner(&self) -> SkillSnapResult<Vec<ProjectWithOwner>> {
        debug!("Listing all projects with owner");

        let rows = sqlx::query_as::<_, ProjectWithOwnerRow>(
            r#"
            SELECT p.id, p.title, p.description, p.image_url, p.portfolio_user_id,
                   p.created_at, p.updated_at, u.name AS owner_name
            FROM projects p
            JOIN portfolio_users u ON u.id = p.portfolio_user_id
            ORDER BY p.id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(ProjectWithOwner::from).collect())
    }

    async fn find_by_id(&self, id: ProjectId) -> SkillSnapResult<Option<Project>> {
        debug!("Finding project by id: {}", id);

        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Project::from))
    }

    async fn find_by_portfolio_user(
        &self,
        portfolio_user_id: PortfolioUserId,
    ) -> SkillSnapResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM projects WHERE portfolio_user_id = ? ORDER BY id"
        ))
        .bind(portfolio_user_id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn create(&self, project: &NewProject) -> SkillSnapResult<Project> {
        debug!("Creating project: {}", project.title);

        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO projects (title, description, image_url, portfolio_user_id,
                                  created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(project.portfolio_user_id.into_inner())
        .bind(now)
        .bind(now)
        .execute(self.pool.inner())
        .await?;

        let id = ProjectId::new(result.last_insert_rowid());
        self.find_by_id(id)
            .await?
            .ok_or_else(|| SkillSnapError::Internal("Failed to fetch inserted project".to_string()))
    }

    async fn update(&self, project: &Project) -> SkillSnapResult<Project> {
        debug!("Updating project: {}", project.id);

        let result = sqlx::query(
            r#"
            UPDATE projects
            SET title = ?, description = ?, image_url = ?, portfolio_user_id = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(project.portfolio_user_id.into_inner())
        .bind(project.updated_at)
        .bind(project.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(SkillSnapError::not_found("Project", project.id));
        }

        self.find_by_id(project.id)
            .await?
            .ok_or_else(|| SkillSnapError::Internal("Failed to fetch updated project".to_string()))
    }

    async fn delete(&self, id: ProjectId) -> SkillSnapResult<bool> {
        debug!("Deleting project: {}", id);

        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for SqliteProjectRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteProjectRepository").finish_non_exhaustive()
    }
}
