//! # SkillSnap Service
//!
//! Business logic service layer: authentication, portfolio content CRUD, and
//! the read-through cache for collection reads.

pub mod auth_service;
pub mod cache;
pub mod dto;
pub mod portfolio_user_service;
pub mod project_service;
pub mod skill_service;

#[cfg(test)]
mod testing;

pub use auth_service::*;
pub use cache::*;
pub use dto::*;
pub use portfolio_user_service::*;
pub use project_service::*;
pub use skill_service::*;
