use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::finance::FinancialRecord;
use shared_models::inventory::InventoryItem;
use shared_models::lab::{LabOrder, Laboratory};
use shared_models::plan::TreatmentPlan;
use shared_models::staff::StaffMember;
use shared_models::{Appointment, BookingSettingsUpdate, Clinic, ClockTime, Patient, Treatment};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Slot {time} on {date} is already booked for doctor {doctor_id}")]
    SlotTaken {
        doctor_id: String,
        date: NaiveDate,
        time: ClockTime,
    },

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::SlotTaken { .. } => AppError::Conflict(message),
            StoreError::NotFound(msg) => AppError::NotFound(msg),
            StoreError::Unavailable(msg) => AppError::Storage(msg),
        }
    }
}

#[async_trait]
pub trait ClinicDirectory: Send + Sync {
    async fn list_clinics(&self) -> StoreResult<Vec<Clinic>>;

    async fn get_clinic(&self, clinic_id: Uuid) -> StoreResult<Option<Clinic>>;

    /// Returns the updated clinic, or `None` when no clinic has this id.
    async fn update_clinic_booking_settings(
        &self,
        clinic_id: Uuid,
        settings: BookingSettingsUpdate,
    ) -> StoreResult<Option<Clinic>>;
}

#[async_trait]
pub trait TreatmentCatalog: Send + Sync {
    async fn list_treatments(&self) -> StoreResult<Vec<Treatment>>;
}

#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn list_appointments(&self) -> StoreResult<Vec<Appointment>>;

    async fn appointments_for_doctor_on(
        &self,
        doctor_id: &str,
        date: NaiveDate,
    ) -> StoreResult<Vec<Appointment>>;

    /// Inserts the patient and the appointment together, but only if no live
    /// appointment already holds `(doctor_id, date, time)`. Either both records
    /// become visible or neither does; a held slot yields `StoreError::SlotTaken`.
    async fn insert_booking_if_free(
        &self,
        patient: Patient,
        appointment: Appointment,
    ) -> StoreResult<Appointment>;
}

#[async_trait]
pub trait PatientStore: Send + Sync {
    async fn list_patients(&self) -> StoreResult<Vec<Patient>>;

    async fn get_patient(&self, patient_id: Uuid) -> StoreResult<Option<Patient>>;

    async fn insert_patient(&self, patient: Patient) -> StoreResult<Patient>;

    /// Replaces the stored patient with the same id. `None` when it does not exist.
    async fn save_patient(&self, patient: Patient) -> StoreResult<Option<Patient>>;
}

#[async_trait]
pub trait BackOfficeStore: Send + Sync {
    async fn list_laboratories(&self) -> StoreResult<Vec<Laboratory>>;

    async fn get_laboratory(&self, laboratory_id: Uuid) -> StoreResult<Option<Laboratory>>;

    async fn insert_laboratory(&self, laboratory: Laboratory) -> StoreResult<Laboratory>;

    async fn list_lab_orders(&self) -> StoreResult<Vec<LabOrder>>;

    async fn get_lab_order(&self, order_id: Uuid) -> StoreResult<Option<LabOrder>>;

    /// Records the order and its ledger entry in one step.
    async fn insert_lab_order(
        &self,
        order: LabOrder,
        expense: FinancialRecord,
    ) -> StoreResult<LabOrder>;

    /// Replaces the stored order with the same id. `None` when it does not exist.
    async fn save_lab_order(&self, order: LabOrder) -> StoreResult<Option<LabOrder>>;

    async fn list_treatment_plans(&self) -> StoreResult<Vec<TreatmentPlan>>;

    async fn get_treatment_plan(&self, plan_id: Uuid) -> StoreResult<Option<TreatmentPlan>>;

    async fn insert_treatment_plan(&self, plan: TreatmentPlan) -> StoreResult<TreatmentPlan>;

    async fn save_treatment_plan(&self, plan: TreatmentPlan) -> StoreResult<Option<TreatmentPlan>>;

    async fn list_financial_records(&self) -> StoreResult<Vec<FinancialRecord>>;

    async fn list_staff(&self) -> StoreResult<Vec<StaffMember>>;

    async fn list_inventory(&self) -> StoreResult<Vec<InventoryItem>>;
}

/// Everything the clinic cells need from storage.
pub trait ClinicStore:
    ClinicDirectory + TreatmentCatalog + AppointmentStore + PatientStore + BackOfficeStore
{
}

impl<T> ClinicStore for T where
    T: ClinicDirectory + TreatmentCatalog + AppointmentStore + PatientStore + BackOfficeStore
{
}
