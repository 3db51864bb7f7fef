//! Domain entities and value objects.

mod account;
mod email;
mod portfolio;

pub use account::*;
pub use email::*;
pub use portfolio::*;
