//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use courtyard_core::types::time::format_hhmm;
use courtyard_entity::booking::Booking;
use courtyard_entity::facility::Facility;
use courtyard_entity::user::User;
use courtyard_service::auth::AuthenticatedUser;
use courtyard_service::booking::SlotAvailability;

use super::request::OperatingHoursDto;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Count response for unread-count style endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// The count.
    pub count: i64,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Department/branch.
    pub branch: Option<String>,
    /// Role.
    pub role: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            email: user.email,
            branch: user.branch,
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

/// Login/register response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

impl From<AuthenticatedUser> for LoginResponse {
    fn from(auth: AuthenticatedUser) -> Self {
        Self {
            access_token: auth.access_token,
            expires_at: auth.expires_at,
            user: auth.user.into(),
        }
    }
}

/// Facility details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityResponse {
    /// Facility ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Campus location.
    pub location: String,
    /// Whether the facility accepts bookings.
    pub availability: bool,
    /// Capacity (people).
    pub capacity: i32,
    /// Daily operating window.
    pub operating_hours: OperatingHoursDto,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Facility> for FacilityResponse {
    fn from(facility: Facility) -> Self {
        Self {
            id: facility.id,
            name: facility.name,
            location: facility.location,
            availability: facility.availability,
            capacity: facility.capacity,
            operating_hours: OperatingHoursDto {
                open: format_hhmm(facility.open_time),
                close: format_hhmm(facility.close_time),
            },
            created_at: facility.created_at,
        }
    }
}

/// Booking details. Slot times travel as `HH:MM` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    /// Booking ID.
    pub id: Uuid,
    /// Owner.
    pub user_id: Uuid,
    /// Facility.
    pub facility_id: Uuid,
    /// Day of the slot.
    pub date: NaiveDate,
    /// Slot start, `HH:MM`.
    pub start_time: String,
    /// Slot end, `HH:MM`.
    pub end_time: String,
    /// Lifecycle status.
    pub status: String,
    /// Waitlist rank, absent for the primary booking.
    pub waitlist_position: Option<i32>,
    /// Admin remarks.
    pub remarks: Option<String>,
    /// Submitted at.
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            facility_id: booking.facility_id,
            date: booking.date,
            start_time: format_hhmm(booking.start_time),
            end_time: format_hhmm(booking.end_time),
            status: booking.status.to_string(),
            waitlist_position: booking.waitlist_position,
            remarks: booking.remarks,
            created_at: booking.created_at,
        }
    }
}

/// The availability grid for one facility on one day.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityResponse {
    /// The facility.
    pub facility_id: Uuid,
    /// The resolved day.
    pub date: NaiveDate,
    /// The slot grid with occupancy.
    pub slots: Vec<SlotAvailability>,
}

/// 409 body offering the waitlist when a slot is taken.
///
/// Deliberately says nothing about the occupying booking.
#[derive(Debug, Clone, Serialize)]
pub struct WaitlistOfferResponse {
    /// Always false.
    pub success: bool,
    /// Machine-readable error code.
    pub error: String,
    /// Always true; marks the slot-taken outcome.
    pub conflict: bool,
    /// Human-readable explanation.
    pub message: String,
    /// Whether the caller may resubmit with `join_waitlist = true`.
    pub waitlist_available: bool,
}

/// Result of a transition, including any promotion it triggered.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionResponse {
    /// The transitioned booking.
    pub booking: BookingResponse,
    /// The booking promoted off the waitlist, if any.
    pub promoted: Option<BookingResponse>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status, `"ok"` or `"degraded"`.
    pub status: String,
    /// Database reachability.
    pub database: bool,
}
