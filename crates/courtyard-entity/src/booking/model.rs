//! Booking entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::BookingStatus;

/// Remarks text written onto a booking when it is promoted off the waitlist.
pub const PROMOTION_REMARKS: &str = "Promoted from waitlist";

/// A facility booking request.
///
/// A booking with `waitlist_position = None` is the *primary* booking
/// for its slot; at most one primary booking with an active status may
/// exist per `{facility, date, start_time}`. Waitlisted bookings carry
/// an ascending rank starting at 1; rank 1 promotes first when the
/// primary occupant vacates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The requesting user.
    pub user_id: Uuid,
    /// The booked facility.
    pub facility_id: Uuid,
    /// The day the slot is on.
    pub date: NaiveDate,
    /// Slot start.
    pub start_time: NaiveTime,
    /// Slot end. Always start + 60 minutes.
    pub end_time: NaiveTime,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Waitlist rank, absent for the primary booking.
    pub waitlist_position: Option<i32>,
    /// Free-form admin remarks (rejection reason, promotion marker).
    pub remarks: Option<String>,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Whether this booking sits on the waitlist.
    pub fn is_waitlisted(&self) -> bool {
        self.waitlist_position.is_some()
    }

    /// Whether this booking is the primary occupant of its slot.
    pub fn is_primary(&self) -> bool {
        self.waitlist_position.is_none()
    }

    /// The instant the booked slot starts, in UTC.
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.date.and_time(self.start_time).and_utc()
    }
}

/// Data required to create a new booking.
#[derive(Debug, Clone)]
pub struct NewBooking {
    /// The requesting user.
    pub user_id: Uuid,
    /// The booked facility.
    pub facility_id: Uuid,
    /// The day the slot is on.
    pub date: NaiveDate,
    /// Slot start.
    pub start_time: NaiveTime,
    /// Slot end.
    pub end_time: NaiveTime,
    /// Waitlist rank, `None` for a primary booking.
    pub waitlist_position: Option<i32>,
}
