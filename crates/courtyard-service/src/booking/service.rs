//! Booking submission: validation, the one-per-day rule, slot conflict
//! detection, and waitlist entry.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use courtyard_core::error::AppError;
use courtyard_core::types::time::parse_hhmm;
use courtyard_database::repositories::{BookingRepository, FacilityRepository};
use courtyard_entity::booking::{Booking, NewBooking};
use courtyard_entity::facility::Facility;
use courtyard_entity::facility::slot::SLOT_MINUTES;

use crate::context::RequestContext;
use crate::notification::NotificationDispatcher;

/// A booking submission. Slot times arrive as `HH:MM` strings and are
/// parsed here.
#[derive(Debug, Clone)]
pub struct SubmitBookingInput {
    /// The facility to book.
    pub facility_id: Uuid,
    /// The day of the slot.
    pub date: NaiveDate,
    /// Slot start, `HH:MM`.
    pub start_time: String,
    /// Slot end, `HH:MM`.
    pub end_time: String,
    /// Whether to join the waitlist when the slot is taken.
    pub join_waitlist: bool,
}

/// Result of a booking submission.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The slot was free; a primary pending booking was created.
    Created(Booking),
    /// The slot was taken and the caller opted in; a waitlisted entry
    /// was created at the returned booking's rank.
    Waitlisted(Booking),
    /// The slot is taken and the caller did not opt into the waitlist.
    /// Nothing was written; the caller can resubmit with the waitlist
    /// flag set. Which booking holds the slot is not disclosed.
    WaitlistOffer,
}

/// Handles booking submission and listing.
#[derive(Debug, Clone)]
pub struct BookingService {
    facility_repo: Arc<FacilityRepository>,
    booking_repo: Arc<BookingRepository>,
    dispatcher: Arc<NotificationDispatcher>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        facility_repo: Arc<FacilityRepository>,
        booking_repo: Arc<BookingRepository>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            facility_repo,
            booking_repo,
            dispatcher,
        }
    }

    /// Submits a booking request for the caller.
    ///
    /// Validation order: facility existence and availability, time
    /// format, slot shape against the facility's grid, the one-per-day
    /// rule, then slot occupancy. The pre-insert checks are advisory;
    /// the store's uniqueness backstops settle races and surface the
    /// same error kinds.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        input: SubmitBookingInput,
    ) -> Result<SubmitOutcome, AppError> {
        let facility = self
            .facility_repo
            .find_by_id(input.facility_id)
            .await?
            .ok_or_else(|| AppError::not_found("Facility not found"))?;

        if !facility.availability {
            return Err(AppError::facility_unavailable(
                "This facility is not currently accepting bookings",
            ));
        }

        let start_time = parse_hhmm(&input.start_time)?;
        let end_time = parse_hhmm(&input.end_time)?;
        validate_slot_shape(&facility, start_time, end_time)?;

        if self
            .booking_repo
            .find_for_user_on_date(ctx.user_id, input.date)
            .await?
            .is_some()
        {
            return Err(AppError::daily_limit_exceeded(
                "You already have a booking for this date. Only one booking per day is allowed.",
            ));
        }

        let occupant = self
            .booking_repo
            .find_primary_for_slot(input.facility_id, input.date, start_time)
            .await?;

        match occupant {
            None => {
                let booking = self
                    .booking_repo
                    .create(&NewBooking {
                        user_id: ctx.user_id,
                        facility_id: input.facility_id,
                        date: input.date,
                        start_time,
                        end_time,
                        waitlist_position: None,
                    })
                    .await?;
                info!(booking_id = %booking.id, user_id = %ctx.user_id, "Created booking");
                Ok(SubmitOutcome::Created(booking))
            }
            Some(_) if !input.join_waitlist => Ok(SubmitOutcome::WaitlistOffer),
            Some(_) => {
                let rank = self
                    .booking_repo
                    .max_waitlist_position(input.facility_id, input.date, start_time)
                    .await?
                    .unwrap_or(0)
                    + 1;
                let booking = self
                    .booking_repo
                    .create(&NewBooking {
                        user_id: ctx.user_id,
                        facility_id: input.facility_id,
                        date: input.date,
                        start_time,
                        end_time,
                        waitlist_position: Some(rank),
                    })
                    .await?;
                info!(
                    booking_id = %booking.id,
                    user_id = %ctx.user_id,
                    rank,
                    "Joined waitlist"
                );
                self.dispatcher.waitlist_joined(&booking, &facility).await?;
                Ok(SubmitOutcome::Waitlisted(booking))
            }
        }
    }

    /// Loads one booking; non-admins may only see their own.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Booking, AppError> {
        let booking = self
            .booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;
        if !ctx.is_admin() && booking.user_id != ctx.user_id {
            return Err(AppError::forbidden("Not your booking"));
        }
        Ok(booking)
    }

    /// Lists bookings with optional filters. Admin only.
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        date: Option<NaiveDate>,
        facility_id: Option<Uuid>,
    ) -> Result<Vec<Booking>, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin role required"));
        }
        self.booking_repo.find_all(date, facility_id).await
    }

    /// Lists the caller's own bookings.
    pub async fn list_mine(&self, ctx: &RequestContext) -> Result<Vec<Booking>, AppError> {
        self.booking_repo.find_by_user(ctx.user_id).await
    }
}

/// Checks that the requested interval is exactly one slot of the
/// facility's grid.
fn validate_slot_shape(
    facility: &Facility,
    start_time: chrono::NaiveTime,
    end_time: chrono::NaiveTime,
) -> Result<(), AppError> {
    let duration = end_time.signed_duration_since(start_time);
    if duration.num_minutes() != SLOT_MINUTES {
        return Err(AppError::validation(format!(
            "Bookings must be exactly {SLOT_MINUTES} minutes long"
        )));
    }
    let on_grid = facility
        .slots()
        .iter()
        .any(|slot| slot.start_time == start_time && slot.end_time == end_time);
    if !on_grid {
        return Err(AppError::validation(
            "Requested time is outside the facility's operating hours",
        ));
    }
    Ok(())
}
