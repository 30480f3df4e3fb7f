//! Application builder — wires repositories, services, router, and the
//! background worker into a running server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use courtyard_core::config::AppConfig;
use courtyard_core::error::AppError;
use courtyard_database::repositories::{
    BookingRepository, FacilityRepository, NotificationRepository, UserRepository,
};
use courtyard_service::auth::AuthService;
use courtyard_service::booking::{AvailabilityService, BookingService, TransitionService};
use courtyard_service::facility::FacilityService;
use courtyard_service::notification::{NotificationDispatcher, NotificationService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration and a connected pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let facility_repo = Arc::new(FacilityRepository::new(db_pool.clone()));
    let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));

    let jwt = Arc::new(courtyard_auth::JwtCodec::new(&config.auth));

    let dispatcher = Arc::new(NotificationDispatcher::new(
        Arc::clone(&notification_repo),
        &config.booking,
    ));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&jwt),
        &config.auth,
    ));
    let facility_service = Arc::new(FacilityService::new(Arc::clone(&facility_repo)));
    let availability_service = Arc::new(AvailabilityService::new(
        Arc::clone(&facility_repo),
        Arc::clone(&booking_repo),
    ));
    let booking_service = Arc::new(BookingService::new(
        Arc::clone(&facility_repo),
        Arc::clone(&booking_repo),
        Arc::clone(&dispatcher),
    ));
    let transition_service = Arc::new(TransitionService::new(
        Arc::clone(&booking_repo),
        Arc::clone(&facility_repo),
        Arc::clone(&dispatcher),
    ));
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&notification_repo)));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt,
        auth_service,
        facility_service,
        availability_service,
        booking_service,
        transition_service,
        notification_service,
    }
}

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Courtyard server with the given configuration and pool.
///
/// Starts the in-process worker (when enabled), binds the listener, and
/// serves until ctrl-c, then shuts the worker down.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));

    let mut worker = if config.worker.enabled {
        let mut scheduler =
            courtyard_worker::CronScheduler::new(config.worker.clone(), notification_repo).await?;
        scheduler.register_tasks().await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Background worker disabled by configuration");
        None
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, db_pool);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(scheduler) = worker.as_mut() {
        scheduler.shutdown().await?;
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutdown signal received");
}
