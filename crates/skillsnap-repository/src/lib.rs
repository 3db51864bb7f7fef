//! # SkillSnap Repository
//!
//! SQLite persistence layer: connection pool with migrations, repository
//! traits consumed by the service layer, and their SQLx implementations.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProjectRepository>   (domain interface)
//! SqliteProjectRepository           (SQLx implementation)
//!   ↓
//! SQLite
//! ```

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
