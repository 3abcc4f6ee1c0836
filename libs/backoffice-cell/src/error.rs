use thiserror::Error;
use uuid::Uuid;

use shared_database::StoreError;
use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum BackOfficeError {
    #[error("Patient not found: {0}")]
    PatientNotFound(Uuid),

    #[error("Laboratory not found: {0}")]
    LaboratoryNotFound(Uuid),

    #[error("Lab order not found: {0}")]
    LabOrderNotFound(Uuid),

    #[error("Treatment plan not found: {0}")]
    PlanNotFound(Uuid),

    #[error("Cannot move from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<BackOfficeError> for AppError {
    fn from(err: BackOfficeError) -> Self {
        let message = err.to_string();
        match err {
            BackOfficeError::PatientNotFound(_)
            | BackOfficeError::LaboratoryNotFound(_)
            | BackOfficeError::LabOrderNotFound(_)
            | BackOfficeError::PlanNotFound(_) => AppError::NotFound(message),
            BackOfficeError::InvalidTransition { .. } => AppError::Conflict(message),
            BackOfficeError::ValidationError(_) => AppError::ValidationError(message),
            BackOfficeError::Store(store_err) => store_err.into(),
        }
    }
}
