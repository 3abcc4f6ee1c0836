use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use shared_database::{ClinicStore, PatientStore};
use shared_models::{Patient, PatientPriority, PatientStatus};

use crate::error::BackOfficeError;
use crate::models::{CreatePatientRequest, UpdatePatientRequest};

pub struct PatientService {
    store: Arc<dyn ClinicStore>,
}

impl PatientService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn list_patients(&self, status: Option<PatientStatus>) -> Result<Vec<Patient>, BackOfficeError> {
        debug!("Listing patients (status filter: {:?})", status);

        let patients = self.store.list_patients().await?;
        Ok(match status {
            Some(status) => patients.into_iter().filter(|p| p.status == status).collect(),
            None => patients,
        })
    }

    pub async fn get_patient(&self, patient_id: Uuid) -> Result<Patient, BackOfficeError> {
        self.store
            .get_patient(patient_id)
            .await?
            .ok_or(BackOfficeError::PatientNotFound(patient_id))
    }

    /// Case-insensitive match on name or treatment, substring match on phone.
    pub async fn search_patients(&self, query: &str) -> Result<Vec<Patient>, BackOfficeError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(BackOfficeError::ValidationError("search query must not be empty".to_string()));
        }
        debug!("Searching patients for {:?}", query);

        let patients = self.store.list_patients().await?;
        Ok(patients.into_iter().filter(|p| p.matches_query(query)).collect())
    }

    /// Registers a patient from the front desk. A new record starts with no
    /// visits and nothing spent.
    pub async fn add_patient(
        &self,
        request: CreatePatientRequest,
        today: NaiveDate,
    ) -> Result<Patient, BackOfficeError> {
        let name = required("name", &request.name)?;
        let phone = required("phone", &request.phone)?;

        let patient = Patient {
            id: Uuid::new_v4(),
            name,
            age: request.age,
            phone,
            email: request.email.trim().to_string(),
            address: request.address,
            last_visit: request.last_visit.unwrap_or(today),
            next_appointment: request.next_appointment,
            treatment: request.treatment,
            status: request.status.unwrap_or(PatientStatus::Active),
            priority: request.priority.unwrap_or(PatientPriority::Normal),
            total_visits: 0,
            total_spent: 0,
            notes: request.notes,
            medical_history: request.medical_history,
        };

        let patient = self.store.insert_patient(patient).await?;
        info!("Registered patient {}", patient.id);
        Ok(patient)
    }

    pub async fn update_patient(
        &self,
        patient_id: Uuid,
        update: UpdatePatientRequest,
    ) -> Result<Patient, BackOfficeError> {
        if update.is_empty() {
            return Err(BackOfficeError::ValidationError("no patient fields supplied".to_string()));
        }

        let mut patient = self.get_patient(patient_id).await?;

        if let Some(name) = update.name {
            patient.name = required("name", &name)?;
        }
        if let Some(phone) = update.phone {
            patient.phone = required("phone", &phone)?;
        }
        if let Some(age) = update.age {
            patient.age = age;
        }
        if let Some(email) = update.email {
            patient.email = email.trim().to_string();
        }
        if let Some(address) = update.address {
            patient.address = address;
        }
        if let Some(treatment) = update.treatment {
            patient.treatment = treatment;
        }
        if let Some(status) = update.status {
            patient.status = status;
        }
        if let Some(priority) = update.priority {
            patient.priority = priority;
        }
        if let Some(last_visit) = update.last_visit {
            patient.last_visit = last_visit;
        }
        if let Some(next) = update.next_appointment {
            patient.next_appointment = Some(next);
        }
        if let Some(notes) = update.notes {
            patient.notes = notes;
        }
        if let Some(history) = update.medical_history {
            patient.medical_history = history;
        }

        let patient = self
            .store
            .save_patient(patient)
            .await?
            .ok_or(BackOfficeError::PatientNotFound(patient_id))?;
        debug!("Updated patient {}", patient.id);
        Ok(patient)
    }
}

fn required(field: &str, value: &str) -> Result<String, BackOfficeError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BackOfficeError::ValidationError(format!("{} is required", field)));
    }
    Ok(value.to_string())
}
