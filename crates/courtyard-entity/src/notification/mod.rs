//! Notification entity model and type enumerations.

pub mod model;
pub mod related;
pub mod types;

pub use model::{NewNotification, Notification};
pub use related::{BookingKind, RelatedBooking};
pub use types::NotificationType;
