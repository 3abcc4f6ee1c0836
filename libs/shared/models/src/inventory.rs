use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub category: InventoryCategory,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub unit: String,
    /// Unit price in dinars.
    pub price: i64,
    pub supplier: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub status: StockStatus,
}

impl InventoryItem {
    /// Low or out of stock.
    pub fn needs_restock(&self) -> bool {
        matches!(self.status, StockStatus::LowStock | StockStatus::OutOfStock)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryCategory {
    Medicine,
    Equipment,
    Supplies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    Expired,
}
