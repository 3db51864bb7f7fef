//! Hand-rolled in-memory repositories for service tests.

use async_trait::async_trait;
use chrono::Utc;
use skillsnap_core::{
    PortfolioUser, PortfolioUserId, Project, ProjectId, Skill, SkillId, SkillSnapError,
    SkillSnapResult,
};
use skillsnap_repository::{
    NewPortfolioUser, NewProject, NewSkill, OwnerSummary, PortfolioUserRepository,
    ProjectRepository, ProjectWithOwner, SkillRepository, SkillWithOwner,
};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

fn owner_name(id: PortfolioUserId) -> String {
    format!("user-{id}")
}

/// In-memory portfolio user repository.
pub struct StubPortfolioUserRepository {
    users: Mutex<Vec<PortfolioUser>>,
    next_id: AtomicI64,
}

impl StubPortfolioUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seeds a single user with the given ID.
    pub fn with_user(id: i64) -> Self {
        let repo = Self::new();
        let now = Utc::now();
        repo.users.lock().unwrap().push(PortfolioUser {
            id: PortfolioUserId::new(id),
            name: owner_name(PortfolioUserId::new(id)),
            bio: String::new(),
            profile_image_url: String::new(),
            created_at: now,
            updated_at: now,
        });
        repo.next_id.store(id + 1, Ordering::SeqCst);
        repo
    }
}

#[async_trait]
impl PortfolioUserRepository for StubPortfolioUserRepository {
    async fn find_all(&self) -> SkillSnapResult<Vec<PortfolioUser>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: PortfolioUserId) -> SkillSnapResult<Option<PortfolioUser>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn exists(&self, id: PortfolioUserId) -> SkillSnapResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.id == id))
    }

    async fn create(&self, user: &NewPortfolioUser) -> SkillSnapResult<PortfolioUser> {
        let now = Utc::now();
        let created = PortfolioUser {
            id: PortfolioUserId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name: user.name.clone(),
            bio: user.bio.clone(),
            profile_image_url: user.profile_image_url.clone(),
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, user: &PortfolioUser) -> SkillSnapResult<PortfolioUser> {
        let mut users = self.users.lock().unwrap();
        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| SkillSnapError::not_found("PortfolioUser", user.id))?;
        *existing = user.clone();
        Ok(user.clone())
    }

    async fn delete(&self, id: PortfolioUserId) -> SkillSnapResult<bool> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

/// In-memory project repository that counts reads.
pub struct CountingProjectRepository {
    projects: Mutex<Vec<Project>>,
    next_id: AtomicI64,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
    fail_next_list: AtomicBool,
}

impl CountingProjectRepository {
    pub fn new() -> Self {
        Self {
            projects: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            list_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            fail_next_list: AtomicBool::new(false),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// Makes the next list read fail with a database error.
    pub fn fail_next_list(&self) {
        self.fail_next_list.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProjectRepository for CountingProjectRepository {
    async fn find_all_with_owner(&self) -> SkillSnapResult<Vec<ProjectWithOwner>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_list.swap(false, Ordering::SeqCst) {
            return Err(SkillSnapError::Database("simulated outage".to_string()));
        }
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .map(|p| ProjectWithOwner {
                owner: OwnerSummary {
                    id: p.portfolio_user_id,
                    name: owner_name(p.portfolio_user_id),
                },
                project: p.clone(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: ProjectId) -> SkillSnapResult<Option<Project>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_portfolio_user(
        &self,
        portfolio_user_id: PortfolioUserId,
    ) -> SkillSnapResult<Vec<Project>> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.portfolio_user_id == portfolio_user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, project: &NewProject) -> SkillSnapResult<Project> {
        let now = Utc::now();
        let created = Project {
            id: ProjectId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            title: project.title.clone(),
            description: project.description.clone(),
            image_url: project.image_url.clone(),
            portfolio_user_id: project.portfolio_user_id,
            created_at: now,
            updated_at: now,
        };
        self.projects.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, project: &Project) -> SkillSnapResult<Project> {
        let mut projects = self.projects.lock().unwrap();
        let existing = projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or_else(|| SkillSnapError::not_found("Project", project.id))?;
        *existing = project.clone();
        Ok(project.clone())
    }

    async fn delete(&self, id: ProjectId) -> SkillSnapResult<bool> {
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok(projects.len() < before)
    }
}

/// In-memory skill repository that counts reads.
pub struct CountingSkillRepository {
    skills: Mutex<Vec<Skill>>,
    next_id: AtomicI64,
    list_calls: AtomicUsize,
    fail_next_list: AtomicBool,
}

impl CountingSkillRepository {
    pub fn new() -> Self {
        Self {
            skills: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            list_calls: AtomicUsize::new(0),
            fail_next_list: AtomicBool::new(false),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Makes the next list read fail with a database error.
    pub fn fail_next_list(&self) {
        self.fail_next_list.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl SkillRepository for CountingSkillRepository {
    async fn find_all_with_owner(&self) -> SkillSnapResult<Vec<SkillWithOwner>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_list.swap(false, Ordering::SeqCst) {
            return Err(SkillSnapError::Database("simulated outage".to_string()));
        }
        Ok(self
            .skills
            .lock()
            .unwrap()
            .iter()
            .map(|s| SkillWithOwner {
                owner: OwnerSummary {
                    id: s.portfolio_user_id,
                    name: owner_name(s.portfolio_user_id),
                },
                skill: s.clone(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: SkillId) -> SkillSnapResult<Option<Skill>> {
        Ok(self
            .skills
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn find_by_portfolio_user(
        &self,
        portfolio_user_id: PortfolioUserId,
    ) -> SkillSnapResult<Vec<Skill>> {
        Ok(self
            .skills
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.portfolio_user_id == portfolio_user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, skill: &NewSkill) -> SkillSnapResult<Skill> {
        let now = Utc::now();
        let created = Skill {
            id: SkillId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name: skill.name.clone(),
            level: skill.level.clone(),
            portfolio_user_id: skill.portfolio_user_id,
            created_at: now,
            updated_at: now,
        };
        self.skills.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, skill: &Skill) -> SkillSnapResult<Skill> {
        let mut skills = self.skills.lock().unwrap();
        let existing = skills
            .iter_mut()
            .find(|s| s.id == skill.id)
            .ok_or_else(|| SkillSnapError::not_found("Skill", skill.id))?;
        *existing = skill.clone();
        Ok(skill.clone())
    }

    async fn delete(&self, id: SkillId) -> SkillSnapResult<bool> {
        let mut skills = self.skills.lock().unwrap();
        let before = skills.len();
        skills.retain(|s| s.id != id);
        Ok(skills.len() < before)
    }
}
