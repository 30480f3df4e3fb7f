//! Due-reminder release job.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use courtyard_core::error::AppError;
use courtyard_database::repositories::NotificationRepository;

/// Releases deferred reminder notifications whose scheduled instant has
/// arrived, making them visible to their recipients.
#[derive(Debug, Clone)]
pub struct ReminderReleaseJob {
    notification_repo: Arc<NotificationRepository>,
}

impl ReminderReleaseJob {
    /// Creates a new reminder release job.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Runs one release pass. Returns how many reminders were released.
    pub async fn run(&self) -> Result<usize, AppError> {
        let released = self.notification_repo.release_due(Utc::now()).await?;
        if released.is_empty() {
            debug!("No reminders due");
        } else {
            info!(count = released.len(), "Released due reminders");
        }
        Ok(released.len())
    }
}
