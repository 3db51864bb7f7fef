//! SQLite repository implementations.

mod account_repository;
mod portfolio_user_repository;
mod project_repository;
mod skill_repository;

pub use account_repository::SqliteAccountRepository;
pub use portfolio_user_repository::SqlitePortfolioUserRepository;
pub use project_repository::SqliteProjectRepository;
pub use skill_repository::SqliteSkillRepository;
