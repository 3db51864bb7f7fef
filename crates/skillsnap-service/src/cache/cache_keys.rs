//! Cache key constants for the cached collection reads.
//!
//! Each cached collection has exactly one key. Keys are never derived from
//! query parameters.

/// Key for the full projects list.
pub const PROJECTS_LIST: &str = "projects_list";

/// Key for the full skills list.
pub const SKILLS_LIST: &str = "skills_list";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct_and_stable() {
        assert_eq!(PROJECTS_LIST, "projects_list");
        assert_eq!(SKILLS_LIST, "skills_list");
        assert_ne!(PROJECTS_LIST, SKILLS_LIST);
    }
}
