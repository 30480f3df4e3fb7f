//! User-facing notification queries.

use std::sync::Arc;

use courtyard_core::error::AppError;
use courtyard_core::types::pagination::{PageRequest, PageResponse};
use courtyard_database::repositories::NotificationRepository;
use courtyard_entity::notification::Notification;
use uuid::Uuid;

use crate::context::RequestContext;

/// Handles listing, read-marking, and deletion of a user's notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Lists the caller's released notifications, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Notification>, AppError> {
        self.notification_repo.find_by_user(ctx.user_id, &page).await
    }

    /// Counts the caller's unread notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<i64, AppError> {
        self.notification_repo.count_unread(ctx.user_id).await
    }

    /// Marks one of the caller's notifications as read.
    pub async fn mark_read(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let updated = self.notification_repo.mark_read(id, ctx.user_id).await?;
        if !updated {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }

    /// Marks all of the caller's notifications as read, returning how
    /// many changed.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.notification_repo.mark_all_read(ctx.user_id).await
    }

    /// Deletes one of the caller's notifications.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let deleted = self.notification_repo.delete(id, ctx.user_id).await?;
        if !deleted {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }
}
