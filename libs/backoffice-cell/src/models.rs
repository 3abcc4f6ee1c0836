use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::finance::RecordType;
use shared_models::lab::{LabOrderStatus, LabOrderType, LabSpecifications, OrderPriority, PriceRange};
use shared_models::plan::PlanStatus;
use shared_models::staff::StaffStatus;
use shared_models::{PatientPriority, PatientStatus};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientListQuery {
    pub status: Option<PatientStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatientSearchQuery {
    pub q: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub treatment: String,
    pub status: Option<PatientStatus>,
    pub priority: Option<PatientPriority>,
    /// Defaults to the day the record is created.
    pub last_visit: Option<NaiveDate>,
    pub next_appointment: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub medical_history: Vec<String>,
}

/// Partial patient update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub treatment: Option<String>,
    pub status: Option<PatientStatus>,
    pub priority: Option<PatientPriority>,
    pub last_visit: Option<NaiveDate>,
    pub next_appointment: Option<NaiveDate>,
    pub notes: Option<String>,
    pub medical_history: Option<Vec<String>>,
}

impl UpdatePatientRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.treatment.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.last_visit.is_none()
            && self.next_appointment.is_none()
            && self.notes.is_none()
            && self.medical_history.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLaboratoryRequest {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub working_hours: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Days.
    pub average_delivery_time: u32,
    #[serde(default)]
    pub quality_rating: f32,
    pub price_range: Option<PriceRange>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffQuery {
    pub status: Option<StaffStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryQuery {
    #[serde(default)]
    pub low_stock: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinancialRecordQuery {
    pub record_type: Option<RecordType>,
    pub category: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    /// Reference day for "today" and "this month"; defaults to the current UTC date.
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLabOrderRequest {
    pub patient_id: Uuid,
    pub laboratory_id: Uuid,
    pub treatment_plan_id: Option<Uuid>,
    pub order_type: LabOrderType,
    pub description: String,
    #[serde(default)]
    pub specifications: LabSpecifications,
    pub order_date: Option<NaiveDate>,
    /// Defaults to the order date plus the laboratory's average delivery time.
    pub expected_delivery_date: Option<NaiveDate>,
    pub cost: i64,
    #[serde(default)]
    pub is_paid: bool,
    pub doctor_notes: Option<String>,
    pub priority: Option<OrderPriority>,
    #[serde(default)]
    pub follow_up_required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLabOrderStatusRequest {
    pub status: LabOrderStatus,
    pub lab_notes: Option<String>,
    pub actual_delivery_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanPhaseRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub estimated_duration: u32,
    pub cost: i64,
    #[serde(default)]
    pub requires_lab: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTreatmentPlanRequest {
    pub patient_id: Uuid,
    pub doctor_id: String,
    pub doctor_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub phases: Vec<CreatePlanPhaseRequest>,
    /// Days. Defaults to the sum of phase durations.
    pub estimated_duration: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlanStatusRequest {
    pub status: PlanStatus,
}

/// Dashboard figures for one reference day. Amounts are whole dinars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicStats {
    pub today_appointments: usize,
    pub pending_appointments: usize,
    pub completed_today: usize,
    pub total_patients: usize,
    pub monthly_revenue: i64,
    pub total_revenue: i64,
    pub total_expenses: i64,
    pub net_profit: i64,
    pub pending_lab_orders: usize,
    pub ready_lab_orders: usize,
    pub overdue_lab_orders: usize,
    pub this_month_lab_costs: i64,
    pub active_staff: usize,
    /// Inventory items that are low or out of stock.
    pub low_stock: usize,
}
