//! HTTP controllers.

pub mod auth_controller;
pub mod health_controller;
pub mod portfolio_user_controller;
pub mod project_controller;
pub mod skill_controller;
