//! Booking status enumeration and transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use courtyard_core::AppError;

/// Lifecycle status of a booking.
///
/// ```text
/// pending  --approve--> approved
/// pending  --reject---> rejected
/// pending  --cancel---> canceled
/// approved --cancel---> canceled
/// ```
///
/// `rejected` and `canceled` are terminal. The transition engine accepts
/// any admin-supplied target status and only *logs* violations of this
/// table, matching the portal's historical behavior; [`Self::can_transition_to`]
/// encodes the table for that check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting admin review.
    Pending,
    /// Confirmed by an admin.
    Approved,
    /// Declined by an admin. Terminal.
    Rejected,
    /// Withdrawn by the user or an admin. Terminal.
    Canceled,
}

impl BookingStatus {
    /// Statuses that occupy a slot (block other primary bookings).
    pub const ACTIVE: [BookingStatus; 2] = [Self::Pending, Self::Approved];

    /// Whether no further transition is modeled from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Canceled)
    }

    /// Whether entering this status vacates the slot, making it
    /// eligible for waitlist promotion.
    pub fn vacates_slot(&self) -> bool {
        matches!(self, Self::Rejected | Self::Canceled)
    }

    /// Whether the transition table permits moving to `next` from here.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Rejected)
                | (Self::Pending, Self::Canceled)
                | (Self::Approved, Self::Canceled)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "canceled" => Ok(Self::Canceled),
            _ => Err(AppError::validation(format!(
                "Invalid booking status: '{s}'. Expected one of: pending, approved, rejected, canceled"
            ))),
        }
    }
}
