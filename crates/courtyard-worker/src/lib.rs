//! Background worker: cron-driven reminder release and notification
//! retention cleanup.
//!
//! The worker runs in-process next to the HTTP server and talks to the
//! same connection pool. Reminders are not pushed anywhere; releasing
//! one simply makes it visible to the owner's next notification poll.

pub mod jobs;
pub mod scheduler;

pub use scheduler::CronScheduler;
