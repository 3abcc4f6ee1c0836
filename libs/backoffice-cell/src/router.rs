use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use shared_utils::AppState;

use crate::handlers;

/// Clinic back-office routes: patients, laboratory work, treatment plans, staff,
/// inventory, the ledger and stats.
pub fn backoffice_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Patients
        .route("/patients", get(handlers::list_patients).post(handlers::create_patient))
        .route("/patients/search", get(handlers::search_patients))
        .route("/patients/{patient_id}", get(handlers::get_patient).patch(handlers::update_patient))
        .route("/patients/{patient_id}/lab-orders", get(handlers::get_patient_lab_orders))
        .route("/patients/{patient_id}/treatment-plans", get(handlers::get_patient_treatment_plans))

        // Laboratory work
        .route("/laboratories", get(handlers::list_laboratories).post(handlers::create_laboratory))
        .route("/lab-orders", get(handlers::list_lab_orders).post(handlers::create_lab_order))
        .route("/lab-orders/{order_id}", get(handlers::get_lab_order))
        .route("/lab-orders/{order_id}/status", patch(handlers::update_lab_order_status))

        // Treatment plans
        .route("/treatment-plans", get(handlers::list_treatment_plans).post(handlers::create_treatment_plan))
        .route("/treatment-plans/{plan_id}", get(handlers::get_treatment_plan))
        .route("/treatment-plans/{plan_id}/status", patch(handlers::update_treatment_plan_status))

        // Staff, stock and ledger
        .route("/staff", get(handlers::list_staff))
        .route("/inventory", get(handlers::list_inventory))
        .route("/financial-records", get(handlers::list_financial_records))

        .route("/stats", get(handlers::get_clinic_stats))
        .with_state(state)
}
