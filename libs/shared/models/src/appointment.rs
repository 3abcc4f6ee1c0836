use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clinic::ClockTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub clinic_id: Option<Uuid>,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub duration: u32,
    pub treatment: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub status: AppointmentStatus,
    pub source: AppointmentSource,
    pub notes: Option<String>,
    pub reminder: bool,
    pub patient_phone: Option<String>,
    pub patient_email: Option<String>,
}

impl Appointment {
    /// Whether this appointment still holds its slot.
    pub fn occupies_slot(&self) -> bool {
        self.status != AppointmentStatus::Cancelled
    }

    pub fn conflicts_with(&self, doctor_id: &str, date: NaiveDate, time: ClockTime) -> bool {
        self.occupies_slot() && self.doctor_id == doctor_id && self.date == date && self.time == time
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::InProgress => write!(f, "in_progress"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentSource {
    Manual,
    OnlineBooking,
}
