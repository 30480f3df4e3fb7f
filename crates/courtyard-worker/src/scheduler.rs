//! Cron scheduler for the background jobs.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};

use courtyard_core::config::WorkerConfig;
use courtyard_core::error::AppError;
use courtyard_database::repositories::NotificationRepository;

use crate::jobs::{NotificationCleanupJob, ReminderReleaseJob};

/// Cron-based scheduler for periodic background tasks.
pub struct CronScheduler {
    scheduler: JobScheduler,
    config: WorkerConfig,
    reminder_job: Arc<ReminderReleaseJob>,
    cleanup_job: Arc<NotificationCleanupJob>,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Creates a new scheduler with both jobs wired up.
    pub async fn new(
        config: WorkerConfig,
        notification_repo: Arc<NotificationRepository>,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        let retention_days = config.notification_retention_days;
        Ok(Self {
            scheduler,
            config,
            reminder_job: Arc::new(ReminderReleaseJob::new(Arc::clone(&notification_repo))),
            cleanup_job: Arc::new(NotificationCleanupJob::new(notification_repo, retention_days)),
        })
    }

    /// Registers all scheduled tasks.
    pub async fn register_tasks(&self) -> Result<(), AppError> {
        self.register_reminder_release().await?;
        self.register_notification_cleanup().await?;
        tracing::info!("All scheduled tasks registered");
        Ok(())
    }

    /// Starts the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;
        tracing::info!("Cron scheduler started");
        Ok(())
    }

    /// Shuts the scheduler down.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;
        tracing::info!("Cron scheduler shut down");
        Ok(())
    }

    /// Due-reminder release, every minute by default.
    async fn register_reminder_release(&self) -> Result<(), AppError> {
        let job_impl = Arc::clone(&self.reminder_job);
        let job = CronJob::new_async(
            self.config.reminder_release_cron.as_str(),
            move |_uuid, _lock| {
                let job_impl = Arc::clone(&job_impl);
                Box::pin(async move {
                    if let Err(e) = job_impl.run().await {
                        tracing::error!("Reminder release failed: {e}");
                    }
                })
            },
        )
        .map_err(|e| AppError::internal(format!("Failed to create reminder schedule: {e}")))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add reminder schedule: {e}")))?;

        tracing::info!(cron = %self.config.reminder_release_cron, "Registered: reminder_release");
        Ok(())
    }

    /// Notification retention cleanup, daily by default.
    async fn register_notification_cleanup(&self) -> Result<(), AppError> {
        let job_impl = Arc::clone(&self.cleanup_job);
        let job = CronJob::new_async(self.config.cleanup_cron.as_str(), move |_uuid, _lock| {
            let job_impl = Arc::clone(&job_impl);
            Box::pin(async move {
                if let Err(e) = job_impl.run().await {
                    tracing::error!("Notification cleanup failed: {e}");
                }
            })
        })
        .map_err(|e| AppError::internal(format!("Failed to create cleanup schedule: {e}")))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add cleanup schedule: {e}")))?;

        tracing::info!(cron = %self.config.cleanup_cron, "Registered: notification_cleanup");
        Ok(())
    }
}
