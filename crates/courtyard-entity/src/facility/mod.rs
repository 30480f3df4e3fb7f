//! Facility entity and the derived slot grid.

pub mod model;
pub mod slot;

pub use model::Facility;
pub use slot::{Slot, generate_slots};
