use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Minutes.
    pub duration: u32,
    pub price: i64,
    pub category: String,
    pub status: TreatmentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentStatus {
    Active,
    Inactive,
}
