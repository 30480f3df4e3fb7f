//! Tagged reference to the booking a notification is about.
//!
//! The portal has two booking collections (facility slots and equipment
//! loans); a notification may point into either. The reference is a
//! tagged union — a kind discriminator plus an id — rather than a
//! dynamically-typed foreign key.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which booking collection a [`RelatedBooking`] points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    /// A facility slot booking (this engine).
    Facility,
    /// An equipment loan booking (external collaborator).
    Equipment,
}

impl BookingKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Facility => "facility",
            Self::Equipment => "equipment",
        }
    }
}

/// A typed reference to the booking that triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedBooking {
    /// Which booking collection the id belongs to.
    pub kind: BookingKind,
    /// The referenced booking's id.
    pub id: Uuid,
}

impl RelatedBooking {
    /// Reference a facility booking.
    pub fn facility(id: Uuid) -> Self {
        Self {
            kind: BookingKind::Facility,
            id,
        }
    }

    /// Reference an equipment booking.
    pub fn equipment(id: Uuid) -> Self {
        Self {
            kind: BookingKind::Equipment,
            id,
        }
    }
}
