//! Booking submission, availability resolution, and status transitions.

pub mod availability;
pub mod service;
pub mod transition;

pub use availability::{AvailabilityService, SlotAvailability};
pub use service::{BookingService, SubmitBookingInput, SubmitOutcome};
pub use transition::{TransitionOutcome, TransitionService};
