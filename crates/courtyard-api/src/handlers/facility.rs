//! Facility handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use courtyard_core::error::AppError;
use courtyard_service::facility::{CreateFacilityInput, UpdateFacilityInput};

use crate::dto::request::{AvailabilityQuery, CreateFacilityRequest, UpdateFacilityRequest};
use crate::dto::response::{ApiResponse, AvailabilityResponse, FacilityResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/facilities
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<FacilityResponse>>>, AppError> {
    let facilities = state.facility_service.list().await?;
    Ok(Json(ApiResponse::ok(
        facilities.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/facilities/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FacilityResponse>>, AppError> {
    let facility = state.facility_service.get(id).await?;
    Ok(Json(ApiResponse::ok(facility.into())))
}

/// POST /api/facilities
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateFacilityRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FacilityResponse>>), AppError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let facility = state
        .facility_service
        .create(
            auth.context(),
            CreateFacilityInput {
                name: body.name,
                location: body.location,
                availability: body.availability,
                capacity: body.capacity,
                open_time: body.operating_hours.open,
                close_time: body.operating_hours.close,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(facility.into()))))
}

/// PUT /api/facilities/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateFacilityRequest>,
) -> Result<Json<ApiResponse<FacilityResponse>>, AppError> {
    let hours = body.operating_hours.unwrap_or_default();
    let facility = state
        .facility_service
        .update(
            auth.context(),
            id,
            UpdateFacilityInput {
                name: body.name,
                location: body.location,
                availability: body.availability,
                capacity: body.capacity,
                open_time: hours.open,
                close_time: hours.close,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(facility.into())))
}

/// GET /api/facilities/{id}/availability?date=YYYY-MM-DD
pub async fn availability(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, AppError> {
    let slots = state.availability_service.resolve(id, query.date).await?;
    Ok(Json(ApiResponse::ok(AvailabilityResponse {
        facility_id: id,
        date: query.date,
        slots,
    })))
}
