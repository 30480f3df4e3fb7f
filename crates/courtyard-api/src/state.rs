//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use courtyard_auth::JwtCodec;
use courtyard_core::config::AppConfig;
use courtyard_service::auth::AuthService;
use courtyard_service::booking::{AvailabilityService, BookingService, TransitionService};
use courtyard_service::facility::FacilityService;
use courtyard_service::notification::NotificationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool, used by the health check.
    pub db_pool: PgPool,
    /// JWT codec for the auth extractor.
    pub jwt: Arc<JwtCodec>,
    /// Registration, login, current-user lookup.
    pub auth_service: Arc<AuthService>,
    /// Facility listing and management.
    pub facility_service: Arc<FacilityService>,
    /// Slot-grid availability resolution.
    pub availability_service: Arc<AvailabilityService>,
    /// Booking submission and listing.
    pub booking_service: Arc<BookingService>,
    /// Status transitions and waitlist promotion.
    pub transition_service: Arc<TransitionService>,
    /// User-facing notification queries.
    pub notification_service: Arc<NotificationService>,
}
