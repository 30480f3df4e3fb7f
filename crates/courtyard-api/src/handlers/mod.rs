//! HTTP request handlers, one module per domain.

pub mod auth;
pub mod booking;
pub mod facility;
pub mod health;
pub mod notification;
