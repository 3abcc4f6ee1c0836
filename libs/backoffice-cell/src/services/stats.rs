use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use shared_database::{AppointmentStore, BackOfficeStore, ClinicStore, PatientStore};
use shared_models::finance::{RecordType, LAB_EXPENSE_CATEGORY};
use shared_models::lab::LabOrderStatus;
use shared_models::staff::StaffStatus;
use shared_models::AppointmentStatus;

use crate::error::BackOfficeError;
use crate::models::ClinicStats;

pub struct StatsService {
    store: Arc<dyn ClinicStore>,
}

impl StatsService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn clinic_stats(&self, today: NaiveDate) -> Result<ClinicStats, BackOfficeError> {
        debug!("Computing clinic stats for {}", today);

        let appointments = self.store.list_appointments().await?;
        let patients = self.store.list_patients().await?;
        let records = self.store.list_financial_records().await?;
        let lab_orders = self.store.list_lab_orders().await?;
        let staff = self.store.list_staff().await?;
        let inventory = self.store.list_inventory().await?;

        let income = || records.iter().filter(|r| r.record_type == RecordType::Income);
        let expenses = || records.iter().filter(|r| r.record_type == RecordType::Expense);

        let total_revenue: i64 = income().map(|r| r.amount).sum();
        let total_expenses: i64 = expenses().map(|r| r.amount).sum();

        Ok(ClinicStats {
            today_appointments: appointments.iter().filter(|a| a.date == today).count(),
            pending_appointments: appointments
                .iter()
                .filter(|a| a.status == AppointmentStatus::Scheduled)
                .count(),
            completed_today: appointments
                .iter()
                .filter(|a| a.date == today && a.status == AppointmentStatus::Completed)
                .count(),
            total_patients: patients.len(),
            monthly_revenue: income().filter(|r| r.in_month(today)).map(|r| r.amount).sum(),
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
            pending_lab_orders: lab_orders.iter().filter(|o| o.is_pending()).count(),
            ready_lab_orders: lab_orders
                .iter()
                .filter(|o| o.status == LabOrderStatus::Ready)
                .count(),
            overdue_lab_orders: lab_orders.iter().filter(|o| o.is_overdue(today)).count(),
            this_month_lab_costs: expenses()
                .filter(|r| r.category == LAB_EXPENSE_CATEGORY && r.in_month(today))
                .map(|r| r.amount)
                .sum(),
            active_staff: staff.iter().filter(|s| s.status == StaffStatus::Active).count(),
            low_stock: inventory.iter().filter(|i| i.needs_restock()).count(),
        })
    }
}
