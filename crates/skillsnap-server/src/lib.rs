//! # SkillSnap Server Library
//!
//! Dependency wiring and startup utilities for the SkillSnap server.

pub mod di;
pub mod startup;
