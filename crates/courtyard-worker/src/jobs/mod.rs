//! Job implementations run by the cron scheduler.

pub mod cleanup;
pub mod reminder;

pub use cleanup::NotificationCleanupJob;
pub use reminder::ReminderReleaseJob;
