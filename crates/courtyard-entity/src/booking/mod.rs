//! Booking entity and status state machine.

pub mod model;
pub mod status;

pub use model::{Booking, NewBooking};
pub use status::BookingStatus;
