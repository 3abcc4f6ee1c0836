use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clinic::{ClockTime, DayOfWeek};

/// A clinic team member. Doctor ids are the same strings clinics and
/// appointments carry in `doctor_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: StaffRole,
    pub phone: String,
    pub email: String,
    pub specialization: Option<String>,
    #[serde(default)]
    pub schedule: BTreeMap<DayOfWeek, Shift>,
    pub status: StaffStatus,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub start: ClockTime,
    pub end: ClockTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Doctor,
    Nurse,
    Assistant,
    Receptionist,
    Manager,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    Active,
    OnLeave,
    Inactive,
}
