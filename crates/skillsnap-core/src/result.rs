//! Result type aliases for SkillSnap.

use crate::SkillSnapError;

/// A specialized `Result` type for SkillSnap operations.
pub type SkillSnapResult<T> = Result<T, SkillSnapError>;
