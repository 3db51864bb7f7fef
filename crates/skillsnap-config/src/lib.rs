//! # SkillSnap Config
//!
//! Layered configuration loading for SkillSnap: TOML files under `config/`
//! plus `SKILLSNAP_`-prefixed environment variables.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
