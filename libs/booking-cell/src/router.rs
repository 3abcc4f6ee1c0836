use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_utils::AppState;

use crate::handlers;

/// Public booking routes, nested under `/api/clinics` next to the directory routes.
pub fn booking_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/{clinic_id}/slots", get(handlers::get_available_slots))
        .route("/{clinic_id}/bookings", post(handlers::create_online_booking))
        .with_state(state)
}
