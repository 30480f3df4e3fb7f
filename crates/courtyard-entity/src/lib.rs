//! # courtyard-entity
//!
//! Domain entity models for the Courtyard booking portal: facilities
//! and their derived slot grids, bookings with the waitlist state
//! machine, notifications, and users.

pub mod booking;
pub mod facility;
pub mod notification;
pub mod user;
