use std::sync::Arc;

use tracing::debug;

use shared_database::{BackOfficeStore, ClinicStore};
use shared_models::inventory::InventoryItem;
use shared_models::staff::{StaffMember, StaffStatus};

use crate::error::BackOfficeError;

/// Read access to the clinic team and its stock room.
pub struct StaffService {
    store: Arc<dyn ClinicStore>,
}

impl StaffService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn list_staff(&self, status: Option<StaffStatus>) -> Result<Vec<StaffMember>, BackOfficeError> {
        debug!("Listing staff (status filter: {:?})", status);

        let staff = self.store.list_staff().await?;
        Ok(match status {
            Some(status) => staff.into_iter().filter(|s| s.status == status).collect(),
            None => staff,
        })
    }

    pub async fn list_inventory(&self, low_stock_only: bool) -> Result<Vec<InventoryItem>, BackOfficeError> {
        let items = self.store.list_inventory().await?;
        Ok(if low_stock_only {
            items.into_iter().filter(InventoryItem::needs_restock).collect()
        } else {
            items
        })
    }
}
