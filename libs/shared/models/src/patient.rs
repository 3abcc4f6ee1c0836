use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub last_visit: NaiveDate,
    pub next_appointment: Option<NaiveDate>,
    pub treatment: String,
    pub status: PatientStatus,
    pub priority: PatientPriority,
    pub total_visits: u32,
    pub total_spent: i64,
    pub notes: String,
    pub medical_history: Vec<String>,
}

impl Patient {
    /// Case-insensitive match on name or treatment, exact substring on phone.
    pub fn matches_query(&self, query: &str) -> bool {
        let lower = query.to_lowercase();
        self.name.to_lowercase().contains(&lower)
            || self.phone.contains(query)
            || self.treatment.to_lowercase().contains(&lower)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatientStatus {
    Active,
    InTreatment,
    Completed,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatientPriority {
    Normal,
    High,
}
