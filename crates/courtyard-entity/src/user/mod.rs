//! User entity model and roles.

pub mod model;
pub mod role;

pub use model::{NewUser, User};
pub use role::UserRole;
