use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::BookingSettingsUpdate;
use shared_utils::AppState;

use crate::models::{ClinicListQuery, NearbyQuery};
use crate::services::DirectoryService;

fn directory(state: &AppState) -> DirectoryService {
    DirectoryService::new(state.store.clone(), state.config.clone())
}

#[axum::debug_handler]
pub async fn list_clinics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClinicListQuery>,
) -> Result<Json<Value>, AppError> {
    let clinics = directory(&state).list_clinics(query).await?;

    Ok(Json(json!({
        "clinics": clinics,
        "total": clinics.len()
    })))
}

#[axum::debug_handler]
pub async fn nearby_clinics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Value>, AppError> {
    let clinics = directory(&state).nearby_clinics(query).await?;

    Ok(Json(json!({
        "clinics": clinics,
        "total": clinics.len()
    })))
}

#[axum::debug_handler]
pub async fn get_clinic(
    State(state): State<Arc<AppState>>,
    Path(clinic_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let clinic = directory(&state).get_clinic(clinic_id).await?;

    Ok(Json(json!(clinic)))
}

#[axum::debug_handler]
pub async fn clinics_by_governorate(
    State(state): State<Arc<AppState>>,
    Path(governorate): Path<String>,
) -> Result<Json<Value>, AppError> {
    let clinics = directory(&state).clinics_by_governorate(&governorate).await?;

    Ok(Json(json!({
        "governorate": governorate,
        "clinics": clinics,
        "total": clinics.len()
    })))
}

#[axum::debug_handler]
pub async fn update_booking_settings(
    State(state): State<Arc<AppState>>,
    Path(clinic_id): Path<Uuid>,
    Json(settings): Json<BookingSettingsUpdate>,
) -> Result<Json<Value>, AppError> {
    let clinic = directory(&state)
        .update_booking_settings(clinic_id, settings)
        .await?;

    Ok(Json(json!({
        "success": true,
        "clinic": clinic
    })))
}
