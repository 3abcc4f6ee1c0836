use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};
use uuid::Uuid;

use shared_database::{AppointmentStore, ClinicDirectory, ClinicStore};
use shared_models::{Clinic, DayOfWeek};

use crate::error::BookingError;
use crate::models::TimeSlot;
use crate::services::slots::{slot_start_times, BreakPolicy};

/// Computes bookable slots for a clinic and date. Results are derived from
/// the store on every call and never cached.
pub struct AvailabilityService {
    store: Arc<dyn ClinicStore>,
    policy: BreakPolicy,
}

impl AvailabilityService {
    pub fn new(store: Arc<dyn ClinicStore>, policy: BreakPolicy) -> Self {
        Self { store, policy }
    }

    /// Slots for `date`, or an empty list when the clinic is unknown, has
    /// online booking disabled, or is closed that day.
    pub async fn compute_available_slots(&self, clinic_id: Uuid, date: NaiveDate) -> Vec<TimeSlot> {
        debug!("Computing available slots for clinic {} on {}", clinic_id, date);

        let clinic = match self.store.get_clinic(clinic_id).await {
            Ok(Some(clinic)) => clinic,
            Ok(None) => {
                debug!("Clinic {} not found, no slots", clinic_id);
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to load clinic {}: {}", clinic_id, e);
                return Vec::new();
            }
        };

        if !clinic.online_booking_enabled {
            debug!("Online booking disabled for clinic {}", clinic_id);
            return Vec::new();
        }

        match self.slots_for_clinic(&clinic, date).await {
            Ok(slots) => slots,
            Err(BookingError::ClosedDay { day, .. }) => {
                debug!("Clinic {} closed on {}", clinic_id, day);
                Vec::new()
            }
            Err(e) => {
                warn!("Slot computation for clinic {} degraded to empty: {}", clinic_id, e);
                Vec::new()
            }
        }
    }

    /// Slots for an already loaded clinic. Fails with `ClosedDay` when the
    /// weekday has no schedule or is marked closed.
    pub async fn slots_for_clinic(
        &self,
        clinic: &Clinic,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, BookingError> {
        let day = DayOfWeek::from(date.weekday());
        let schedule = match clinic.schedule_for(day) {
            Some(schedule) if schedule.is_open => schedule,
            _ => return Err(BookingError::ClosedDay { date, day }),
        };

        let starts = slot_start_times(
            schedule,
            clinic.time_slot_duration,
            &clinic.break_times,
            self.policy,
        );

        let booked = self
            .store
            .appointments_for_doctor_on(&clinic.doctor_id, date)
            .await?;

        let slots = starts
            .into_iter()
            .map(|time| TimeSlot {
                time,
                available: !booked
                    .iter()
                    .any(|apt| apt.conflicts_with(&clinic.doctor_id, date, time)),
                clinic_id: clinic.id,
                date,
            })
            .collect::<Vec<_>>();

        debug!(
            "Clinic {} on {} ({}): {} slots, {} available",
            clinic.id,
            date,
            day,
            slots.len(),
            slots.iter().filter(|s| s.available).count()
        );

        Ok(slots)
    }
}
