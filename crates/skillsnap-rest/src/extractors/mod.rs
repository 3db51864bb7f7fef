//! Request extractors.

mod claims;

pub use claims::{AuthenticatedAccount, AuthError};
