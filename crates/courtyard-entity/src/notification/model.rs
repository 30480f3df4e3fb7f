//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::related::{BookingKind, RelatedBooking};
use super::types::NotificationType;

/// A notification to be surfaced to a polling user.
///
/// Created only by the notification dispatcher. A notification with
/// `scheduled_for` set is invisible to the user until the worker flips
/// `is_sent` at (or after) that instant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Notification category.
    pub notification_type: NotificationType,
    /// Whether the user has read this notification.
    pub is_read: bool,
    /// Which booking collection `related_booking_id` points into.
    pub related_booking_kind: Option<BookingKind>,
    /// The booking this notification is about, if any.
    pub related_booking_id: Option<Uuid>,
    /// Deferred delivery instant for reminder notifications.
    pub scheduled_for: Option<DateTime<Utc>>,
    /// Whether a deferred notification has been released to the user.
    /// Immediate notifications are created with this already set.
    pub is_sent: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// The tagged booking reference, when both columns are present.
    pub fn related_booking(&self) -> Option<RelatedBooking> {
        match (self.related_booking_kind, self.related_booking_id) {
            (Some(kind), Some(id)) => Some(RelatedBooking { kind, id }),
            _ => None,
        }
    }

    /// Whether this is a deferred notification still waiting for release.
    pub fn is_pending_release(&self) -> bool {
        self.scheduled_for.is_some() && !self.is_sent
    }
}

/// Data required to create a new notification.
#[derive(Debug, Clone)]
pub struct NewNotification {
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Notification category.
    pub notification_type: NotificationType,
    /// Related booking reference, if any.
    pub related_booking: Option<RelatedBooking>,
    /// Deferred delivery instant; `None` delivers immediately.
    pub scheduled_for: Option<DateTime<Utc>>,
}

impl NewNotification {
    /// An immediately-visible notification about a facility booking.
    pub fn for_booking(
        user_id: Uuid,
        booking_id: Uuid,
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            title: title.into(),
            message: message.into(),
            notification_type,
            related_booking: Some(RelatedBooking::facility(booking_id)),
            scheduled_for: None,
        }
    }
}
