//! Notification dispatch and user-facing notification queries.

pub mod dispatcher;
pub mod service;
pub mod templates;

pub use dispatcher::NotificationDispatcher;
pub use service::NotificationService;
