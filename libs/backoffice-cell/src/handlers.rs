use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::finance::RecordType;
use shared_utils::AppState;

use crate::models::{
    CreateLabOrderRequest, CreateLaboratoryRequest, CreatePatientRequest,
    CreateTreatmentPlanRequest, FinancialRecordQuery, InventoryQuery, PatientListQuery,
    PatientSearchQuery, StaffQuery, StatsQuery, UpdateLabOrderStatusRequest,
    UpdatePatientRequest, UpdatePlanStatusRequest,
};
use crate::services::{
    FinanceService, LabOrderService, PatientService, StaffService, StatsService,
    TreatmentPlanService,
};

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

// ==============================================================================
// PATIENTS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PatientListQuery>,
) -> Result<Json<Value>, AppError> {
    let patients = PatientService::new(state.store.clone())
        .list_patients(query.status)
        .await?;

    Ok(Json(json!({
        "patients": patients,
        "total": patients.len()
    })))
}

#[axum::debug_handler]
pub async fn search_patients(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PatientSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let patients = PatientService::new(state.store.clone())
        .search_patients(&query.q)
        .await?;

    Ok(Json(json!({
        "query": query.q,
        "patients": patients,
        "total": patients.len()
    })))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let patient = PatientService::new(state.store.clone())
        .get_patient(patient_id)
        .await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let patient = PatientService::new(state.store.clone())
        .add_patient(request, today())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "patient": patient
        })),
    ))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<Uuid>,
    Json(request): Json<UpdatePatientRequest>,
) -> Result<Json<Value>, AppError> {
    let patient = PatientService::new(state.store.clone())
        .update_patient(patient_id, request)
        .await?;

    Ok(Json(json!({
        "success": true,
        "patient": patient
    })))
}

#[axum::debug_handler]
pub async fn get_patient_lab_orders(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let orders = LabOrderService::new(state.store.clone())
        .lab_orders_for_patient(patient_id)
        .await?;

    Ok(Json(json!({
        "patient_id": patient_id,
        "lab_orders": orders,
        "total": orders.len()
    })))
}

#[axum::debug_handler]
pub async fn get_patient_treatment_plans(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let plans = TreatmentPlanService::new(state.store.clone())
        .plans_for_patient(patient_id)
        .await?;

    Ok(Json(json!({
        "patient_id": patient_id,
        "treatment_plans": plans,
        "total": plans.len()
    })))
}

// ==============================================================================
// LABORATORIES & LAB ORDERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_laboratories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let laboratories = LabOrderService::new(state.store.clone())
        .list_laboratories()
        .await?;

    Ok(Json(json!({
        "laboratories": laboratories,
        "total": laboratories.len()
    })))
}

#[axum::debug_handler]
pub async fn create_laboratory(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateLaboratoryRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let laboratory = LabOrderService::new(state.store.clone())
        .add_laboratory(request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "laboratory": laboratory
        })),
    ))
}

#[axum::debug_handler]
pub async fn list_lab_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let orders = LabOrderService::new(state.store.clone())
        .list_lab_orders()
        .await?;

    Ok(Json(json!({
        "lab_orders": orders,
        "total": orders.len()
    })))
}

#[axum::debug_handler]
pub async fn get_lab_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let order = LabOrderService::new(state.store.clone())
        .get_lab_order(order_id)
        .await?;

    Ok(Json(json!(order)))
}

#[axum::debug_handler]
pub async fn create_lab_order(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateLabOrderRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let order = LabOrderService::new(state.store.clone())
        .create_lab_order(request, today())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "lab_order": order
        })),
    ))
}

#[axum::debug_handler]
pub async fn update_lab_order_status(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
    Json(request): Json<UpdateLabOrderStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let order = LabOrderService::new(state.store.clone())
        .update_lab_order_status(order_id, request, today())
        .await?;

    Ok(Json(json!({
        "success": true,
        "lab_order": order
    })))
}

// ==============================================================================
// TREATMENT PLANS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_treatment_plans(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let plans = TreatmentPlanService::new(state.store.clone())
        .list_treatment_plans()
        .await?;

    Ok(Json(json!({
        "treatment_plans": plans,
        "total": plans.len()
    })))
}

#[axum::debug_handler]
pub async fn get_treatment_plan(
    State(state): State<Arc<AppState>>,
    Path(plan_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let plan = TreatmentPlanService::new(state.store.clone())
        .get_treatment_plan(plan_id)
        .await?;

    Ok(Json(json!(plan)))
}

#[axum::debug_handler]
pub async fn create_treatment_plan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateTreatmentPlanRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let plan = TreatmentPlanService::new(state.store.clone())
        .create_treatment_plan(request, today())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "treatment_plan": plan
        })),
    ))
}

#[axum::debug_handler]
pub async fn update_treatment_plan_status(
    State(state): State<Arc<AppState>>,
    Path(plan_id): Path<Uuid>,
    Json(request): Json<UpdatePlanStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let plan = TreatmentPlanService::new(state.store.clone())
        .update_plan_status(plan_id, request.status, today())
        .await?;

    Ok(Json(json!({
        "success": true,
        "treatment_plan": plan
    })))
}

// ==============================================================================
// STAFF, INVENTORY & FINANCE
// ==============================================================================

#[axum::debug_handler]
pub async fn list_staff(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StaffQuery>,
) -> Result<Json<Value>, AppError> {
    let staff = StaffService::new(state.store.clone())
        .list_staff(query.status)
        .await?;

    Ok(Json(json!({
        "staff": staff,
        "total": staff.len()
    })))
}

#[axum::debug_handler]
pub async fn list_inventory(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InventoryQuery>,
) -> Result<Json<Value>, AppError> {
    let items = StaffService::new(state.store.clone())
        .list_inventory(query.low_stock)
        .await?;

    Ok(Json(json!({
        "items": items,
        "total": items.len()
    })))
}

#[axum::debug_handler]
pub async fn list_financial_records(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FinancialRecordQuery>,
) -> Result<Json<Value>, AppError> {
    let records = FinanceService::new(state.store.clone())
        .list_financial_records(&query)
        .await?;

    let sum = |kind: RecordType| -> i64 {
        records
            .iter()
            .filter(|r| r.record_type == kind)
            .map(|r| r.amount)
            .sum()
    };
    let income = sum(RecordType::Income);
    let expenses = sum(RecordType::Expense);

    Ok(Json(json!({
        "records": records,
        "total": records.len(),
        "income": income,
        "expenses": expenses,
        "net": income - expenses
    })))
}

// ==============================================================================
// STATS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_clinic_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<Value>, AppError> {
    let date = query.date.unwrap_or_else(today);
    let stats = StatsService::new(state.store.clone())
        .clinic_stats(date)
        .await?;

    Ok(Json(json!({
        "date": date,
        "stats": stats
    })))
}
