//! # SkillSnap REST
//!
//! REST API layer using Axum for SkillSnap.
//! Provides HTTP endpoints for portfolio users, projects, skills,
//! authentication, and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use middleware::AuthMiddlewareState;
pub use router::*;
pub use state::*;
