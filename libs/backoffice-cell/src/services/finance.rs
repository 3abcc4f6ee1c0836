use std::sync::Arc;

use tracing::debug;

use shared_database::{BackOfficeStore, ClinicStore};
use shared_models::finance::FinancialRecord;

use crate::error::BackOfficeError;
use crate::models::FinancialRecordQuery;

pub struct FinanceService {
    store: Arc<dyn ClinicStore>,
}

impl FinanceService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    /// Ledger entries matching every supplied filter. `from` and `to` are inclusive.
    pub async fn list_financial_records(
        &self,
        query: &FinancialRecordQuery,
    ) -> Result<Vec<FinancialRecord>, BackOfficeError> {
        if let (Some(from), Some(to)) = (query.from, query.to) {
            if from > to {
                return Err(BackOfficeError::ValidationError(format!(
                    "from {} is after to {}",
                    from, to
                )));
            }
        }
        debug!("Listing financial records with {:?}", query);

        let records = self.store.list_financial_records().await?;
        Ok(records
            .into_iter()
            .filter(|r| query.record_type.map_or(true, |t| r.record_type == t))
            .filter(|r| {
                query
                    .category
                    .as_deref()
                    .map_or(true, |c| r.category.eq_ignore_ascii_case(c))
            })
            .filter(|r| query.from.map_or(true, |from| r.date >= from))
            .filter(|r| query.to.map_or(true, |to| r.date <= to))
            .collect())
    }
}
