use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use shared_database::StoreError;
use shared_models::error::AppError;
use shared_models::{ClockTime, DayOfWeek};

/// Why a requested slot cannot be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotUnavailableReason {
    /// The clinic does not offer this time on this date.
    NotOffered,
    /// The time is offered but a live appointment already holds it.
    AlreadyBooked,
}

impl fmt::Display for SlotUnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotUnavailableReason::NotOffered => write!(f, "not offered"),
            SlotUnavailableReason::AlreadyBooked => write!(f, "already booked"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Clinic not found: {0}")]
    ClinicNotFound(Uuid),

    #[error("Online booking is disabled for clinic {0}")]
    BookingDisabled(Uuid),

    #[error("Clinic is closed on {day} ({date})")]
    ClosedDay { date: NaiveDate, day: DayOfWeek },

    #[error("Slot {time} on {date} is {reason}")]
    SlotUnavailable {
        date: NaiveDate,
        time: ClockTime,
        reason: SlotUnavailableReason,
    },

    #[error("Invalid booking request: {0}")]
    InvalidRequest(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        let message = err.to_string();
        match err {
            BookingError::ClinicNotFound(_) => AppError::NotFound(message),
            BookingError::BookingDisabled(_) | BookingError::ClosedDay { .. } => {
                AppError::BadRequest(message)
            }
            BookingError::SlotUnavailable { reason, .. } => match reason {
                SlotUnavailableReason::NotOffered => AppError::BadRequest(message),
                SlotUnavailableReason::AlreadyBooked => AppError::Conflict(message),
            },
            BookingError::InvalidRequest(_) => AppError::ValidationError(message),
            BookingError::Store(store_err) => store_err.into(),
        }
    }
}
