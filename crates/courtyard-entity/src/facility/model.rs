//! Facility entity model.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::slot::{Slot, generate_slots};

/// A bookable campus facility (court, field, hall).
///
/// Owned by admins; the booking engine only reads it. Operating hours
/// define the window that partitions into 1-hour slots.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Facility {
    /// Unique facility identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Campus location.
    pub location: String,
    /// Whether the facility currently accepts bookings.
    pub availability: bool,
    /// Capacity (people), informational only.
    pub capacity: i32,
    /// Daily opening time.
    pub open_time: NaiveTime,
    /// Daily closing time. Slots never cross this boundary.
    pub close_time: NaiveTime,
    /// When the facility was created.
    pub created_at: DateTime<Utc>,
    /// When the facility was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Facility {
    /// The slot grid derived from this facility's operating hours.
    pub fn slots(&self) -> Vec<Slot> {
        generate_slots(self.open_time, self.close_time)
    }
}

/// Data required to create a new facility.
#[derive(Debug, Clone)]
pub struct NewFacility {
    /// Display name.
    pub name: String,
    /// Campus location.
    pub location: String,
    /// Whether the facility accepts bookings.
    pub availability: bool,
    /// Capacity (people).
    pub capacity: i32,
    /// Daily opening time.
    pub open_time: NaiveTime,
    /// Daily closing time.
    pub close_time: NaiveTime,
}

/// Partial update for an existing facility. `None` fields are left as-is.
#[derive(Debug, Clone, Default)]
pub struct FacilityUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New availability flag.
    pub availability: Option<bool>,
    /// New capacity.
    pub capacity: Option<i32>,
    /// New opening time.
    pub open_time: Option<NaiveTime>,
    /// New closing time.
    pub close_time: Option<NaiveTime>,
}
