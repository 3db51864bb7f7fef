//! Application state for Axum handlers.

use skillsnap_service::{AuthService, PortfolioUserService, ProjectService, SkillService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub portfolio_user_service: Arc<dyn PortfolioUserService>,
    pub project_service: Arc<dyn ProjectService>,
    pub skill_service: Arc<dyn SkillService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        portfolio_user_service: Arc<dyn PortfolioUserService>,
        project_service: Arc<dyn ProjectService>,
        skill_service: Arc<dyn SkillService>,
    ) -> Self {
        Self {
            auth_service,
            portfolio_user_service,
            project_service,
            skill_service,
        }
    }
}
