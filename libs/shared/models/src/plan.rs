use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentPlan {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub title: String,
    pub description: String,
    pub phases: Vec<PlanPhase>,
    pub total_cost: i64,
    /// Days.
    pub estimated_duration: u32,
    pub status: PlanStatus,
    pub created_date: NaiveDate,
    pub approved_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPhase {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Days.
    pub estimated_duration: u32,
    pub cost: i64,
    pub status: PhaseStatus,
    pub requires_lab: bool,
    pub lab_order_id: Option<Uuid>,
    #[serde(default)]
    pub appointments: Vec<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Draft,
    Approved,
    InProgress,
    Completed,
    Cancelled,
}

impl PlanStatus {
    pub fn can_transition_to(&self, target: &PlanStatus) -> bool {
        use PlanStatus::*;
        match (self, target) {
            (Draft, Approved) => true,
            (Approved, InProgress) => true,
            (InProgress, Completed) => true,
            (Completed, _) | (Cancelled, _) => false,
            (_, Cancelled) => true,
            _ => false,
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanStatus::Draft => write!(f, "draft"),
            PlanStatus::Approved => write!(f, "approved"),
            PlanStatus::InProgress => write!(f, "in_progress"),
            PlanStatus::Completed => write!(f, "completed"),
            PlanStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_status_transitions() {
        assert!(PlanStatus::Draft.can_transition_to(&PlanStatus::Approved));
        assert!(PlanStatus::Approved.can_transition_to(&PlanStatus::InProgress));
        assert!(PlanStatus::InProgress.can_transition_to(&PlanStatus::Cancelled));
        assert!(!PlanStatus::Draft.can_transition_to(&PlanStatus::Completed));
        assert!(!PlanStatus::Completed.can_transition_to(&PlanStatus::Cancelled));
        assert!(!PlanStatus::Cancelled.can_transition_to(&PlanStatus::Draft));
    }
}
