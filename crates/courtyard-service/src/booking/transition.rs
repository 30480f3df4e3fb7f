//! Status transitions with waitlist promotion.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use courtyard_core::error::AppError;
use courtyard_database::repositories::{BookingRepository, FacilityRepository};
use courtyard_entity::booking::{Booking, BookingStatus};

use crate::context::RequestContext;
use crate::notification::NotificationDispatcher;

/// Result of a status transition.
#[derive(Debug, Clone)]
pub struct TransitionOutcome {
    /// The booking after the transition.
    pub booking: Booking,
    /// The waitlisted booking promoted into the vacated slot, if any.
    pub promoted: Option<Booking>,
}

/// Applies status transitions and drives waitlist promotion.
#[derive(Debug, Clone)]
pub struct TransitionService {
    booking_repo: Arc<BookingRepository>,
    facility_repo: Arc<FacilityRepository>,
    dispatcher: Arc<NotificationDispatcher>,
}

impl TransitionService {
    /// Creates a new transition service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        facility_repo: Arc<FacilityRepository>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            booking_repo,
            facility_repo,
            dispatcher,
        }
    }

    /// Transitions a booking to `new_status`.
    ///
    /// Admins may apply any transition; a student may only cancel their
    /// own booking. Transitions outside the modeled table are applied
    /// anyway and logged, preserving the portal's lenient behavior.
    ///
    /// When a vacating transition hits a primary booking, the
    /// lowest-ranked waitlisted entry at the slot is promoted in the
    /// same transaction: rank cleared, status reset to pending for a
    /// fresh review. Remaining entries keep their ranks.
    pub async fn transition(
        &self,
        ctx: &RequestContext,
        booking_id: Uuid,
        new_status: BookingStatus,
        remarks: Option<String>,
    ) -> Result<TransitionOutcome, AppError> {
        let booking = self
            .booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        if !ctx.is_admin() {
            if booking.user_id != ctx.user_id {
                return Err(AppError::forbidden("Not your booking"));
            }
            if new_status != BookingStatus::Canceled {
                return Err(AppError::forbidden(
                    "Students may only cancel their own bookings",
                ));
            }
        }

        if !booking.status.can_transition_to(new_status) {
            warn!(
                booking_id = %booking.id,
                from = %booking.status,
                to = %new_status,
                "Applying transition outside the modeled table"
            );
        }

        let promote = new_status.vacates_slot() && booking.is_primary();
        let (updated, promoted) = self
            .booking_repo
            .transition_and_promote(booking_id, new_status, remarks.as_deref(), promote)
            .await?;

        info!(
            booking_id = %updated.id,
            status = %updated.status,
            promoted = promoted.is_some(),
            "Booking transitioned"
        );

        self.dispatch_notifications(&updated, promoted.as_ref())
            .await?;

        Ok(TransitionOutcome {
            booking: updated,
            promoted,
        })
    }

    /// Notifies the transitioned booking's owner, the promoted user (if
    /// any), and schedules a pre-slot reminder on approval.
    async fn dispatch_notifications(
        &self,
        updated: &Booking,
        promoted: Option<&Booking>,
    ) -> Result<(), AppError> {
        let facility = self
            .facility_repo
            .find_by_id(updated.facility_id)
            .await?
            .ok_or_else(|| AppError::not_found("Facility not found"))?;

        self.dispatcher.booking_status_changed(updated, &facility).await?;

        if updated.status == BookingStatus::Approved {
            self.dispatcher
                .schedule_booking_reminder(updated, &facility)
                .await?;
        }

        if let Some(promoted) = promoted {
            self.dispatcher
                .waitlist_promoted(promoted, &facility)
                .await?;
        }

        Ok(())
    }
}
