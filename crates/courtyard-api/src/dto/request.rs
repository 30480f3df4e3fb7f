//! Request DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use courtyard_entity::booking::BookingStatus;

/// POST /api/auth/register
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login name.
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    /// Display name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Email address.
    #[validate(email)]
    pub email: String,
    /// Plaintext password; minimum length enforced by the auth service.
    pub password: String,
    /// Optional department/branch.
    pub branch: Option<String>,
}

/// POST /api/auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Operating hours as they travel over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingHoursDto {
    /// Opening time, `HH:MM`.
    pub open: String,
    /// Closing time, `HH:MM`.
    pub close: String,
}

/// POST /api/facilities
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFacilityRequest {
    /// Display name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Campus location.
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    /// Whether the facility accepts bookings. Defaults to true.
    #[serde(default = "default_availability")]
    pub availability: bool,
    /// Capacity (people).
    pub capacity: i32,
    /// Daily operating window.
    pub operating_hours: OperatingHoursDto,
}

fn default_availability() -> bool {
    true
}

/// PUT /api/facilities/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFacilityRequest {
    /// New display name.
    pub name: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New availability flag.
    pub availability: Option<bool>,
    /// New capacity.
    pub capacity: Option<i32>,
    /// New operating window (both halves optional).
    pub operating_hours: Option<PartialOperatingHoursDto>,
}

/// Partial operating-hours update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialOperatingHoursDto {
    /// New opening time, `HH:MM`.
    pub open: Option<String>,
    /// New closing time, `HH:MM`.
    pub close: Option<String>,
}

/// GET /api/facilities/{id}/availability query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// The day to resolve, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// POST /api/bookings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitBookingRequest {
    /// The facility to book.
    pub facility_id: Uuid,
    /// The day of the slot, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Slot start, `HH:MM`.
    pub start_time: String,
    /// Slot end, `HH:MM`.
    pub end_time: String,
    /// Join the waitlist if the slot is taken. Defaults to false.
    #[serde(default)]
    pub join_waitlist: bool,
}

/// GET /api/bookings query parameters (admin listing).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingListQuery {
    /// Filter by date.
    pub date: Option<NaiveDate>,
    /// Filter by facility.
    pub facility_id: Option<Uuid>,
}

/// PUT /api/bookings/{id}/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionBookingRequest {
    /// Target status.
    pub status: BookingStatus,
    /// Optional remarks (rejection reason etc.).
    pub remarks: Option<String>,
}
