//! Registration, login, and current-user lookup.

pub mod service;

pub use service::{AuthService, AuthenticatedUser, LoginInput, RegisterInput};
