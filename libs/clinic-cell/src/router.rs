use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use shared_utils::AppState;

use crate::handlers;

pub fn clinic_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_clinics))
        .route("/nearby", get(handlers::nearby_clinics))
        .route("/governorate/{governorate}", get(handlers::clinics_by_governorate))
        .route("/{clinic_id}", get(handlers::get_clinic))
        .route("/{clinic_id}/booking-settings", patch(handlers::update_booking_settings))
        .with_state(state)
}
