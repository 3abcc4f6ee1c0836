pub mod appointment;
pub mod clinic;
pub mod error;
pub mod finance;
pub mod inventory;
pub mod lab;
pub mod patient;
pub mod plan;
pub mod staff;
pub mod treatment;

pub use appointment::{Appointment, AppointmentSource, AppointmentStatus};
pub use clinic::{
    BookingSettingsUpdate, BreakTime, Clinic, ClockTime, ClockTimeError, DayOfWeek, DaySchedule,
    WorkingHours,
};
pub use error::AppError;
pub use patient::{Patient, PatientPriority, PatientStatus};
pub use treatment::{Treatment, TreatmentStatus};
