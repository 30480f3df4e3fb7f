//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Background worker settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the in-process worker is started at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression for the due-reminder release job.
    #[serde(default = "default_reminder_cron")]
    pub reminder_release_cron: String,
    /// Cron expression for the notification retention cleanup job.
    #[serde(default = "default_cleanup_cron")]
    pub cleanup_cron: String,
    /// Notifications older than this many days are deleted by cleanup.
    #[serde(default = "default_retention_days")]
    pub notification_retention_days: i64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            reminder_release_cron: default_reminder_cron(),
            cleanup_cron: default_cleanup_cron(),
            notification_retention_days: default_retention_days(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_reminder_cron() -> String {
    // every minute
    "0 * * * * *".to_string()
}

fn default_cleanup_cron() -> String {
    // daily at 03:00
    "0 0 3 * * *".to_string()
}

fn default_retention_days() -> i64 {
    90
}
