//! Business logic layer: authentication, facility management, booking
//! submission, availability resolution, status transitions with
//! waitlist promotion, and notification dispatch.

pub mod auth;
pub mod booking;
pub mod context;
pub mod facility;
pub mod notification;

pub use context::RequestContext;
