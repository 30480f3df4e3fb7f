//! Availability resolution: the slot grid annotated with occupancy.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use courtyard_core::error::AppError;
use courtyard_database::repositories::{BookingRepository, FacilityRepository};
use courtyard_entity::booking::Booking;
use courtyard_entity::facility::Slot;

/// One slot of the daily grid with its occupancy state.
#[derive(Debug, Clone, Serialize)]
pub struct SlotAvailability {
    /// The slot itself.
    #[serde(flatten)]
    pub slot: Slot,
    /// Whether the slot has no primary pending/approved booking.
    pub is_available: bool,
    /// Number of waitlisted entries queued at this slot.
    pub waitlist_count: usize,
}

/// Resolves the availability grid for a facility on a date.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    facility_repo: Arc<FacilityRepository>,
    booking_repo: Arc<BookingRepository>,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(
        facility_repo: Arc<FacilityRepository>,
        booking_repo: Arc<BookingRepository>,
    ) -> Self {
        Self {
            facility_repo,
            booking_repo,
        }
    }

    /// Computes the slot grid for a facility on a date, marking each
    /// slot occupied when a primary pending/approved booking holds it
    /// and counting the waitlisted entries behind it.
    ///
    /// The grid is served even when the facility is not accepting
    /// bookings; the availability flag gates submission, not reads.
    ///
    /// The result is a point-in-time snapshot; a slot shown available
    /// can be taken before the caller submits.
    pub async fn resolve(
        &self,
        facility_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<SlotAvailability>, AppError> {
        let facility = self
            .facility_repo
            .find_by_id(facility_id)
            .await?
            .ok_or_else(|| AppError::not_found("Facility not found"))?;

        let active = self
            .booking_repo
            .find_active_for_date(facility_id, date)
            .await?;

        Ok(annotate_slots(facility.slots(), &active))
    }
}

/// Marks each slot of the grid with occupancy derived from the active
/// bookings of the day.
fn annotate_slots(slots: Vec<Slot>, active: &[Booking]) -> Vec<SlotAvailability> {
    slots
        .into_iter()
        .map(|slot| {
            let occupied = active
                .iter()
                .any(|b| b.start_time == slot.start_time && b.is_primary());
            let waitlist_count = active
                .iter()
                .filter(|b| b.start_time == slot.start_time && b.is_waitlisted())
                .count();
            SlotAvailability {
                slot,
                is_available: !occupied,
                waitlist_count,
            }
        })
        .collect()
}
