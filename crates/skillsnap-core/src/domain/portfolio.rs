//! Portfolio entities: users, projects, and skills.

use crate::{PortfolioUserId, ProjectId, SkillId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portfolio profile displayed by the client.
///
/// Each portfolio user owns a collection of [`Project`]s and [`Skill`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioUser {
    /// Unique identifier (DB autoincrement).
    pub id: PortfolioUserId,

    /// Display name.
    pub name: String,

    /// Short biography.
    pub bio: String,

    /// Profile image URL.
    pub profile_image_url: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl PortfolioUser {
    /// Applies a profile update.
    pub fn update(&mut self, name: String, bio: String, profile_image_url: String) {
        self.name = name;
        self.bio = bio;
        self.profile_image_url = profile_image_url;
        self.updated_at = Utc::now();
    }
}

/// A portfolio project owned by a [`PortfolioUser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier (DB autoincrement).
    pub id: ProjectId,

    /// Project title.
    pub title: String,

    /// Project description.
    pub description: String,

    /// Screenshot or cover image URL.
    pub image_url: String,

    /// Owning portfolio user.
    pub portfolio_user_id: PortfolioUserId,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Applies a project update.
    pub fn update(
        &mut self,
        title: String,
        description: String,
        image_url: String,
        portfolio_user_id: PortfolioUserId,
    ) {
        self.title = title;
        self.description = description;
        self.image_url = image_url;
        self.portfolio_user_id = portfolio_user_id;
        self.updated_at = Utc::now();
    }
}

/// A skill entry owned by a [`PortfolioUser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique identifier (DB autoincrement).
    pub id: SkillId,

    /// Skill name (e.g. "Rust").
    pub name: String,

    /// Proficiency level (e.g. "Beginner", "Intermediate", "Expert").
    pub level: String,

    /// Owning portfolio user.
    pub portfolio_user_id: PortfolioUserId,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Skill {
    /// Applies a skill update.
    pub fn update(&mut self, name: String, level: String, portfolio_user_id: PortfolioUserId) {
        self.name = name;
        self.level = level;
        self.portfolio_user_id = portfolio_user_id;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        let now = Utc::now();
        Project {
            id: ProjectId::new(1),
            title: "Portfolio Site".to_string(),
            description: "A personal site".to_string(),
            image_url: String::new(),
            portfolio_user_id: PortfolioUserId::new(1),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_project_update() {
        let mut project = sample_project();
        project.update(
            "New Title".to_string(),
            "New description".to_string(),
            "https://example.com/shot.png".to_string(),
            PortfolioUserId::new(2),
        );

        assert_eq!(project.title, "New Title");
        assert_eq!(project.portfolio_user_id, PortfolioUserId::new(2));
        assert!(project.updated_at >= project.created_at);
    }

    #[test]
    fn test_skill_update() {
        let now = Utc::now();
        let mut skill = Skill {
            id: SkillId::new(1),
            name: "C#".to_string(),
            level: "Intermediate".to_string(),
            portfolio_user_id: PortfolioUserId::new(1),
            created_at: now,
            updated_at: now,
        };

        skill.update(
            "Rust".to_string(),
            "Expert".to_string(),
            PortfolioUserId::new(1),
        );
        assert_eq!(skill.name, "Rust");
        assert_eq!(skill.level, "Expert");
    }
}
