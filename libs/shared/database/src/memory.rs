//! In-memory clinic storage for development, demos and tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::finance::FinancialRecord;
use shared_models::inventory::InventoryItem;
use shared_models::lab::{LabOrder, Laboratory};
use shared_models::plan::TreatmentPlan;
use shared_models::staff::StaffMember;
use shared_models::{Appointment, BookingSettingsUpdate, Clinic, Patient, Treatment};

use crate::store::{
    AppointmentStore, BackOfficeStore, ClinicDirectory, PatientStore, StoreError, StoreResult,
    TreatmentCatalog,
};

/// Initial contents of an [`InMemoryStore`].
#[derive(Debug, Clone, Default)]
pub struct StoreSeed {
    pub clinics: Vec<Clinic>,
    pub treatments: Vec<Treatment>,
    pub appointments: Vec<Appointment>,
    pub patients: Vec<Patient>,
    pub laboratories: Vec<Laboratory>,
    pub lab_orders: Vec<LabOrder>,
    pub treatment_plans: Vec<TreatmentPlan>,
    pub financial_records: Vec<FinancialRecord>,
    pub staff: Vec<StaffMember>,
    pub inventory: Vec<InventoryItem>,
}

/// All collections live behind one lock so multi-record writes are atomic.
pub struct InMemoryStore {
    state: RwLock<StoreSeed>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::from_seed(StoreSeed::default())
    }

    pub fn from_seed(seed: StoreSeed) -> Self {
        info!(
            "In-memory store initialised with {} clinics, {} appointments, {} patients",
            seed.clinics.len(),
            seed.appointments.len(),
            seed.patients.len()
        );
        Self {
            state: RwLock::new(seed),
        }
    }

    /// Writes an appointment without any slot check, as front-desk scheduling does.
    pub async fn insert_appointment(&self, appointment: Appointment) -> Appointment {
        let mut state = self.state.write().await;
        state.appointments.push(appointment.clone());
        appointment
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClinicDirectory for InMemoryStore {
    async fn list_clinics(&self) -> StoreResult<Vec<Clinic>> {
        let state = self.state.read().await;
        Ok(state.clinics.clone())
    }

    async fn get_clinic(&self, clinic_id: Uuid) -> StoreResult<Option<Clinic>> {
        let state = self.state.read().await;
        Ok(state.clinics.iter().find(|c| c.id == clinic_id).cloned())
    }

    async fn update_clinic_booking_settings(
        &self,
        clinic_id: Uuid,
        settings: BookingSettingsUpdate,
    ) -> StoreResult<Option<Clinic>> {
        let mut state = self.state.write().await;
        let Some(clinic) = state.clinics.iter_mut().find(|c| c.id == clinic_id) else {
            return Ok(None);
        };

        settings.apply_to(clinic);
        debug!("Updated booking settings for clinic {}", clinic_id);
        Ok(Some(clinic.clone()))
    }
}

#[async_trait]
impl TreatmentCatalog for InMemoryStore {
    async fn list_treatments(&self) -> StoreResult<Vec<Treatment>> {
        let state = self.state.read().await;
        Ok(state.treatments.clone())
    }
}

#[async_trait]
impl AppointmentStore for InMemoryStore {
    async fn list_appointments(&self) -> StoreResult<Vec<Appointment>> {
        let state = self.state.read().await;
        Ok(state.appointments.clone())
    }

    async fn appointments_for_doctor_on(
        &self,
        doctor_id: &str,
        date: NaiveDate,
    ) -> StoreResult<Vec<Appointment>> {
        let state = self.state.read().await;
        Ok(state
            .appointments
            .iter()
            .filter(|apt| apt.doctor_id == doctor_id && apt.date == date)
            .cloned()
            .collect())
    }

    async fn insert_booking_if_free(
        &self,
        patient: Patient,
        appointment: Appointment,
    ) -> StoreResult<Appointment> {
        let mut state = self.state.write().await;

        let taken = state
            .appointments
            .iter()
            .any(|apt| apt.conflicts_with(&appointment.doctor_id, appointment.date, appointment.time));
        if taken {
            return Err(StoreError::SlotTaken {
                doctor_id: appointment.doctor_id.clone(),
                date: appointment.date,
                time: appointment.time,
            });
        }

        state.patients.push(patient);
        state.appointments.push(appointment.clone());
        debug!(
            "Stored booking {} for {} {}",
            appointment.id, appointment.date, appointment.time
        );
        Ok(appointment)
    }
}

#[async_trait]
impl PatientStore for InMemoryStore {
    async fn list_patients(&self) -> StoreResult<Vec<Patient>> {
        let state = self.state.read().await;
        Ok(state.patients.clone())
    }

    async fn get_patient(&self, patient_id: Uuid) -> StoreResult<Option<Patient>> {
        let state = self.state.read().await;
        Ok(state.patients.iter().find(|p| p.id == patient_id).cloned())
    }

    async fn insert_patient(&self, patient: Patient) -> StoreResult<Patient> {
        let mut state = self.state.write().await;
        state.patients.push(patient.clone());
        Ok(patient)
    }

    async fn save_patient(&self, patient: Patient) -> StoreResult<Option<Patient>> {
        let mut state = self.state.write().await;
        match state.patients.iter_mut().find(|p| p.id == patient.id) {
            Some(existing) => {
                *existing = patient.clone();
                Ok(Some(patient))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl BackOfficeStore for InMemoryStore {
    async fn list_laboratories(&self) -> StoreResult<Vec<Laboratory>> {
        let state = self.state.read().await;
        Ok(state.laboratories.clone())
    }

    async fn get_laboratory(&self, laboratory_id: Uuid) -> StoreResult<Option<Laboratory>> {
        let state = self.state.read().await;
        Ok(state.laboratories.iter().find(|l| l.id == laboratory_id).cloned())
    }

    async fn insert_laboratory(&self, laboratory: Laboratory) -> StoreResult<Laboratory> {
        let mut state = self.state.write().await;
        state.laboratories.push(laboratory.clone());
        Ok(laboratory)
    }

    async fn list_lab_orders(&self) -> StoreResult<Vec<LabOrder>> {
        let state = self.state.read().await;
        Ok(state.lab_orders.clone())
    }

    async fn get_lab_order(&self, order_id: Uuid) -> StoreResult<Option<LabOrder>> {
        let state = self.state.read().await;
        Ok(state.lab_orders.iter().find(|o| o.id == order_id).cloned())
    }

    async fn insert_lab_order(
        &self,
        order: LabOrder,
        expense: FinancialRecord,
    ) -> StoreResult<LabOrder> {
        let mut state = self.state.write().await;
        state.lab_orders.push(order.clone());
        state.financial_records.push(expense);
        Ok(order)
    }

    async fn save_lab_order(&self, order: LabOrder) -> StoreResult<Option<LabOrder>> {
        let mut state = self.state.write().await;
        match state.lab_orders.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => {
                *existing = order.clone();
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    async fn list_treatment_plans(&self) -> StoreResult<Vec<TreatmentPlan>> {
        let state = self.state.read().await;
        Ok(state.treatment_plans.clone())
    }

    async fn get_treatment_plan(&self, plan_id: Uuid) -> StoreResult<Option<TreatmentPlan>> {
        let state = self.state.read().await;
        Ok(state.treatment_plans.iter().find(|p| p.id == plan_id).cloned())
    }

    async fn insert_treatment_plan(&self, plan: TreatmentPlan) -> StoreResult<TreatmentPlan> {
        let mut state = self.state.write().await;
        state.treatment_plans.push(plan.clone());
        Ok(plan)
    }

    async fn save_treatment_plan(&self, plan: TreatmentPlan) -> StoreResult<Option<TreatmentPlan>> {
        let mut state = self.state.write().await;
        match state.treatment_plans.iter_mut().find(|p| p.id == plan.id) {
            Some(existing) => {
                *existing = plan.clone();
                Ok(Some(plan))
            }
            None => Ok(None),
        }
    }

    async fn list_financial_records(&self) -> StoreResult<Vec<FinancialRecord>> {
        let state = self.state.read().await;
        Ok(state.financial_records.clone())
    }

    async fn list_staff(&self) -> StoreResult<Vec<StaffMember>> {
        let state = self.state.read().await;
        Ok(state.staff.clone())
    }

    async fn list_inventory(&self) -> StoreResult<Vec<InventoryItem>> {
        let state = self.state.read().await;
        Ok(state.inventory.clone())
    }
}
