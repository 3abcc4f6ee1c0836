use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::ClockTime;

/// A bookable start time, derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: ClockTime,
    pub available: bool,
    pub clinic_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    pub date: NaiveDate,
}

/// Payload a patient submits to book a clinic slot online. The clinic id
/// comes from the route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlineBookingRequest {
    pub patient_name: String,
    pub patient_phone: String,
    /// Optional; an empty value skips the email check.
    #[serde(default)]
    pub patient_email: String,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub treatment: String,
}
