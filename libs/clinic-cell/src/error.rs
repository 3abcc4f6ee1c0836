use thiserror::Error;
use uuid::Uuid;

use shared_database::StoreError;
use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Clinic not found: {0}")]
    ClinicNotFound(Uuid),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid booking settings: {0}")]
    InvalidSettings(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        let message = err.to_string();
        match err {
            DirectoryError::ClinicNotFound(_) => AppError::NotFound(message),
            DirectoryError::InvalidLocation(_) => AppError::BadRequest(message),
            DirectoryError::InvalidSettings(_) => AppError::ValidationError(message),
            DirectoryError::Store(store_err) => store_err.into(),
        }
    }
}
