//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` impl lives in `courtyard_core::error` (both the trait
//! and `AppError` are foreign to this crate, so the impl cannot live here);
//! the response body type is re-exported for API consumers.

pub use courtyard_core::error::ApiErrorResponse;
