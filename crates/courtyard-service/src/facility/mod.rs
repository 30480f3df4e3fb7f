//! Facility management.

pub mod service;

pub use service::{CreateFacilityInput, FacilityService, UpdateFacilityInput};
