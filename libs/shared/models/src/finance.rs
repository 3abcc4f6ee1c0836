use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ledger category used for laboratory expenses.
pub const LAB_EXPENSE_CATEGORY: &str = "laboratory";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub id: Uuid,
    pub record_type: RecordType,
    pub amount: i64,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub related_to: Option<RelatedParty>,
    pub payment_method: PaymentMethod,
    pub status: RecordStatus,
}

impl FinancialRecord {
    pub fn in_month(&self, reference: NaiveDate) -> bool {
        use chrono::Datelike;
        self.date.year() == reference.year() && self.date.month() == reference.month()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedParty {
    pub party_type: PartyType,
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyType {
    Patient,
    Supplier,
    Staff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
    Insurance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Pending,
    Completed,
    Cancelled,
}
