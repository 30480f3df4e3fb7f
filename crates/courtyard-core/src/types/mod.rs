//! Shared value types.

pub mod pagination;
pub mod time;
