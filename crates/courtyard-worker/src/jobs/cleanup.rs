//! Notification retention cleanup job.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use courtyard_core::error::AppError;
use courtyard_database::repositories::NotificationRepository;

/// Deletes notifications older than the configured retention window.
#[derive(Debug, Clone)]
pub struct NotificationCleanupJob {
    notification_repo: Arc<NotificationRepository>,
    retention_days: i64,
}

impl NotificationCleanupJob {
    /// Creates a new cleanup job.
    pub fn new(notification_repo: Arc<NotificationRepository>, retention_days: i64) -> Self {
        Self {
            notification_repo,
            retention_days,
        }
    }

    /// Runs one cleanup pass. Returns how many notifications were deleted.
    pub async fn run(&self) -> Result<u64, AppError> {
        let cutoff = Utc::now() - Duration::days(self.retention_days);
        let deleted = self.notification_repo.cleanup_old(cutoff).await?;
        if deleted > 0 {
            info!(deleted, retention_days = self.retention_days, "Cleaned up old notifications");
        }
        Ok(deleted)
    }
}
