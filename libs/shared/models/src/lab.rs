use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laboratory {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub specialties: Vec<String>,
    pub working_hours: String,
    pub is_active: bool,
    /// Days.
    pub average_delivery_time: u32,
    pub quality_rating: f32,
    pub price_range: PriceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceRange {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabOrder {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub laboratory_id: Uuid,
    pub laboratory_name: String,
    pub treatment_plan_id: Option<Uuid>,
    pub order_type: LabOrderType,
    pub description: String,
    pub specifications: LabSpecifications,
    pub status: LabOrderStatus,
    pub order_date: NaiveDate,
    pub expected_delivery_date: NaiveDate,
    pub actual_delivery_date: Option<NaiveDate>,
    pub cost: i64,
    pub is_paid: bool,
    pub payment_status: PaymentStatus,
    pub doctor_notes: Option<String>,
    pub lab_notes: Option<String>,
    pub priority: OrderPriority,
    pub follow_up_required: bool,
    pub installation_appointment_id: Option<Uuid>,
}

impl LabOrder {
    /// Ordered or in progress: still waiting on the laboratory.
    pub fn is_pending(&self) -> bool {
        matches!(self.status, LabOrderStatus::Ordered | LabOrderStatus::InProgress)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_pending() && self.expected_delivery_date < today
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabSpecifications {
    pub material: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub quantity: Option<u32>,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabOrderType {
    Prosthetics,
    Crown,
    Bridge,
    Implant,
    Orthodontics,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabOrderStatus {
    Ordered,
    InProgress,
    Ready,
    Delivered,
    Installed,
    Cancelled,
}

impl LabOrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LabOrderStatus::Installed | LabOrderStatus::Cancelled)
    }
}

impl fmt::Display for LabOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabOrderStatus::Ordered => write!(f, "ordered"),
            LabOrderStatus::InProgress => write!(f, "in_progress"),
            LabOrderStatus::Ready => write!(f, "ready"),
            LabOrderStatus::Delivered => write!(f, "delivered"),
            LabOrderStatus::Installed => write!(f, "installed"),
            LabOrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Partial,
    Paid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPriority {
    Normal,
    Urgent,
}
