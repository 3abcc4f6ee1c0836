use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_utils::AppState;

use crate::models::{OnlineBookingRequest, SlotQuery};
use crate::services::{AvailabilityService, BookingService, BreakPolicy};

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<AppState>>,
    Path(clinic_id): Path<Uuid>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<Value>, AppError> {
    let availability_service = AvailabilityService::new(
        state.store.clone(),
        BreakPolicy::from_config(&state.config),
    );

    let slots = availability_service
        .compute_available_slots(clinic_id, query.date)
        .await;
    let available = slots.iter().filter(|slot| slot.available).count();

    Ok(Json(json!({
        "clinic_id": clinic_id,
        "date": query.date,
        "slots": slots,
        "total": slots.len(),
        "available": available
    })))
}

#[axum::debug_handler]
pub async fn create_online_booking(
    State(state): State<Arc<AppState>>,
    Path(clinic_id): Path<Uuid>,
    Json(request): Json<OnlineBookingRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let booking_service = BookingService::new(state.store.clone(), state.config.clone());

    let appointment = booking_service
        .create_online_booking(clinic_id, request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "appointment": appointment,
            "message": "Appointment booked successfully"
        })),
    ))
}
