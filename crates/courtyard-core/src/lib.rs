//! # courtyard-core
//!
//! Core crate for the Courtyard booking portal. Contains configuration
//! schemas, shared value types (HH:MM times, pagination), and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Courtyard crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
