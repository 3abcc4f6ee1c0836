pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::{BookingError, SlotUnavailableReason};
pub use models::{OnlineBookingRequest, SlotQuery, TimeSlot};
pub use services::{AvailabilityService, BookingService, BreakPolicy};
