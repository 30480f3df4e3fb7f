//! Booking handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use courtyard_core::error::AppError;
use courtyard_service::booking::{SubmitBookingInput, SubmitOutcome};

use crate::dto::request::{BookingListQuery, SubmitBookingRequest, TransitionBookingRequest};
use crate::dto::response::{
    ApiResponse, BookingResponse, TransitionResponse, WaitlistOfferResponse,
};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/bookings
///
/// 201 with the booking on creation (primary or waitlisted); 409 with a
/// waitlist offer when the slot is taken and the caller did not opt in.
pub async fn submit(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<SubmitBookingRequest>,
) -> Result<Response, AppError> {
    let outcome = state
        .booking_service
        .submit(
            auth.context(),
            SubmitBookingInput {
                facility_id: body.facility_id,
                date: body.date,
                start_time: body.start_time,
                end_time: body.end_time,
                join_waitlist: body.join_waitlist,
            },
        )
        .await?;

    let response = match outcome {
        SubmitOutcome::Created(booking) | SubmitOutcome::Waitlisted(booking) => (
            StatusCode::CREATED,
            Json(ApiResponse::ok(BookingResponse::from(booking))),
        )
            .into_response(),
        SubmitOutcome::WaitlistOffer => (
            StatusCode::CONFLICT,
            Json(WaitlistOfferResponse {
                success: false,
                error: "SLOT_CONFLICT".to_string(),
                conflict: true,
                message: "This slot is already booked. You can join the waitlist by \
                          resubmitting with join_waitlist set."
                    .to_string(),
                waitlist_available: true,
            }),
        )
            .into_response(),
    };
    Ok(response)
}

/// GET /api/bookings (admin, with optional date/facility filters)
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, AppError> {
    let bookings = state
        .booking_service
        .list_all(auth.context(), query.date, query.facility_id)
        .await?;
    Ok(Json(ApiResponse::ok(
        bookings.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/bookings/me
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, AppError> {
    let bookings = state.booking_service.list_mine(auth.context()).await?;
    Ok(Json(ApiResponse::ok(
        bookings.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/bookings/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let booking = state.booking_service.get(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}

/// PUT /api/bookings/{id}/status
pub async fn transition(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<TransitionBookingRequest>,
) -> Result<Json<ApiResponse<TransitionResponse>>, AppError> {
    let outcome = state
        .transition_service
        .transition(auth.context(), id, body.status, body.remarks)
        .await?;

    Ok(Json(ApiResponse::ok(TransitionResponse {
        booking: outcome.booking.into(),
        promoted: outcome.promoted.map(Into::into),
    })))
}
