//! Data transfer objects for the service layer.

mod auth_dto;
mod portfolio_dto;

pub use auth_dto::*;
pub use portfolio_dto::*;
