//! Notification repository implementation.
//!
//! A notification with `scheduled_for` set and `is_sent = FALSE` has not
//! been released yet and is invisible to every user-facing query; the
//! worker's `release_due` flips it visible once the scheduled instant
//! arrives.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use courtyard_core::error::{AppError, ErrorKind};
use courtyard_core::result::AppResult;
use courtyard_core::types::pagination::{PageRequest, PageResponse};
use courtyard_entity::notification::{NewNotification, Notification};

/// Visibility predicate shared by the user-facing queries.
const RELEASED: &str = "(scheduled_for IS NULL OR is_sent = TRUE)";

/// Repository for notification persistence and the deferred-release flow.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a notification. Immediate notifications (no
    /// `scheduled_for`) are created already released.
    pub async fn create(&self, new: &NewNotification) -> AppResult<Notification> {
        let (kind, booking_id) = match new.related_booking {
            Some(related) => (Some(related.kind), Some(related.id)),
            None => (None, None),
        };

        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications \
                 (user_id, title, message, notification_type, \
                  related_booking_kind, related_booking_id, scheduled_for, is_sent) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(new.user_id)
        .bind(&new.title)
        .bind(&new.message)
        .bind(new.notification_type)
        .bind(kind)
        .bind(booking_id)
        .bind(new.scheduled_for)
        .bind(new.scheduled_for.is_none())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    /// List released notifications for a user, newest first.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND {RELEASED}"
        ))
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count notifications", e)
        })?;

        let notifs = sqlx::query_as::<_, Notification>(&format!(
            "SELECT * FROM notifications WHERE user_id = $1 AND {RELEASED} \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })?;

        Ok(PageResponse::new(
            notifs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count released, unread notifications for a user.
    pub async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM notifications \
             WHERE user_id = $1 AND is_read = FALSE AND {RELEASED}"
        ))
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Mark a notification as read. Returns `false` when the
    /// notification does not exist or belongs to another user.
    pub async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1 AND user_id = $2")
                .bind(notification_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark all of a user's notifications as read.
    pub async fn mark_all_read(&self, user_id: Uuid) -> AppResult<u64> {
        let result =
            sqlx::query("UPDATE notifications SET is_read = TRUE WHERE user_id = $1 AND is_read = FALSE")
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to mark all read", e)
                })?;
        Ok(result.rows_affected())
    }

    /// Delete a notification owned by the user. Returns `false` when the
    /// notification does not exist or belongs to another user.
    pub async fn delete(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND user_id = $2")
            .bind(notification_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete notification", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Release every deferred notification whose scheduled instant has
    /// arrived, returning the released records.
    pub async fn release_due(&self, now: DateTime<Utc>) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET is_sent = TRUE \
             WHERE scheduled_for IS NOT NULL AND scheduled_for <= $1 AND is_sent = FALSE \
             RETURNING *",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to release due reminders", e)
        })
    }

    /// Delete notifications created before the retention cutoff.
    pub async fn cleanup_old(&self, before: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM notifications WHERE created_at < $1")
            .bind(before)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to cleanup notifications", e)
            })?;
        Ok(result.rows_affected())
    }
}
