//! Notification dispatcher: the single producer of notification rows.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use courtyard_core::config::BookingConfig;
use courtyard_core::error::AppError;
use courtyard_core::types::time::format_hhmm;
use courtyard_database::repositories::NotificationRepository;
use courtyard_entity::booking::Booking;
use courtyard_entity::facility::Facility;
use courtyard_entity::notification::{NewNotification, Notification, NotificationType};
use courtyard_entity::notification::related::RelatedBooking;

use super::templates;

/// Creates notifications for booking lifecycle events.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    notification_repo: Arc<NotificationRepository>,
    /// Minutes before slot start to fire the reminder.
    reminder_lead_minutes: i64,
}

impl NotificationDispatcher {
    /// Creates a new dispatcher.
    pub fn new(notification_repo: Arc<NotificationRepository>, config: &BookingConfig) -> Self {
        Self {
            notification_repo,
            reminder_lead_minutes: config.reminder_lead_minutes,
        }
    }

    /// Notifies a booking's owner about a status change.
    pub async fn booking_status_changed(
        &self,
        booking: &Booking,
        facility: &Facility,
    ) -> Result<Notification, AppError> {
        let (title, message) = templates::booking_status(
            booking.status,
            &facility.name,
            booking.date,
            &format_hhmm(booking.start_time),
        );
        self.notification_repo
            .create(&NewNotification::for_booking(
                booking.user_id,
                booking.id,
                NotificationType::BookingStatus,
                title,
                message,
            ))
            .await
    }

    /// Notifies a user that they joined a waitlist.
    pub async fn waitlist_joined(
        &self,
        booking: &Booking,
        facility: &Facility,
    ) -> Result<Notification, AppError> {
        let position = booking.waitlist_position.unwrap_or(0);
        let (title, message) = templates::waitlist_joined(
            &facility.name,
            booking.date,
            &format_hhmm(booking.start_time),
            position,
        );
        self.notification_repo
            .create(&NewNotification::for_booking(
                booking.user_id,
                booking.id,
                NotificationType::Waitlist,
                title,
                message,
            ))
            .await
    }

    /// Notifies a user that their waitlisted booking was promoted.
    pub async fn waitlist_promoted(
        &self,
        booking: &Booking,
        facility: &Facility,
    ) -> Result<Notification, AppError> {
        let (title, message) = templates::waitlist_promoted(
            &facility.name,
            booking.date,
            &format_hhmm(booking.start_time),
        );
        self.notification_repo
            .create(&NewNotification::for_booking(
                booking.user_id,
                booking.id,
                NotificationType::Waitlist,
                title,
                message,
            ))
            .await
    }

    /// Notifies a user that a booking restriction was applied to them.
    ///
    /// Restrictions are imposed by an admin workflow outside the booking
    /// engine; the dispatcher only produces the notification. Not tied
    /// to any single booking.
    pub async fn penalty_applied(
        &self,
        user_id: Uuid,
        penalty_hours: i64,
        reason: &str,
    ) -> Result<Notification, AppError> {
        let (title, message) = templates::penalty(penalty_hours, reason);
        self.notification_repo
            .create(&NewNotification {
                user_id,
                title,
                message,
                notification_type: NotificationType::Penalty,
                related_booking: None,
                scheduled_for: None,
            })
            .await
    }

    /// Schedules a reminder ahead of the booked slot.
    ///
    /// The reminder fires `reminder_lead_minutes` before slot start.
    /// When that instant has already passed, no reminder is created and
    /// `Ok(None)` is returned; a late reminder would be noise.
    pub async fn schedule_booking_reminder(
        &self,
        booking: &Booking,
        facility: &Facility,
    ) -> Result<Option<Notification>, AppError> {
        let fire_at = booking.starts_at() - Duration::minutes(self.reminder_lead_minutes);
        if fire_at <= Utc::now() {
            debug!(
                booking_id = %booking.id,
                fire_at = %fire_at,
                "Reminder time already passed, not scheduling"
            );
            return Ok(None);
        }

        let (title, message) =
            templates::reminder(&facility.name, &format_hhmm(booking.start_time));
        let notification = self
            .notification_repo
            .create(&NewNotification {
                user_id: booking.user_id,
                title,
                message,
                notification_type: NotificationType::Reminder,
                related_booking: Some(RelatedBooking::facility(booking.id)),
                scheduled_for: Some(fire_at),
            })
            .await?;
        Ok(Some(notification))
    }
}
