pub mod finance;
pub mod lab_orders;
pub mod patients;
pub mod plans;
pub mod staff;
pub mod stats;

pub use finance::FinanceService;
pub use lab_orders::LabOrderService;
pub use patients::PatientService;
pub use plans::TreatmentPlanService;
pub use staff::StaffService;
pub use stats::StatsService;
