use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use rentacar_booking::BookingOutcome;
use rentacar_shared::BookingRequest;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/bookings", post(create_booking))
}

/// POST /api/bookings
///
/// Invalid payloads are rejected before the writer runs. Store failures are
/// reported in the body, never as an error status.
async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<BookingOutcome>, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    Ok(Json(state.bookings.create(&req).await))
}
