use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::{AppointmentStore, ClinicDirectory, ClinicStore, StoreError, TreatmentCatalog};
use shared_models::{
    Appointment, AppointmentSource, AppointmentStatus, Clinic, Patient, PatientPriority,
    PatientStatus,
};

use crate::error::{BookingError, SlotUnavailableReason};
use crate::models::OnlineBookingRequest;
use crate::services::availability::AvailabilityService;
use crate::services::slots::BreakPolicy;

/// Note attached to patients registered through the public booking flow.
pub const ONLINE_BOOKING_NOTE: &str = "حجز عبر الإنترنت";

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile("email", r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));

static PHONE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile("phone", r"^\+?[0-9][0-9\s\-()]{5,18}[0-9]$"));

fn compile(name: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            error!("Failed to compile {} pattern, skipping {} checks: {}", name, name, e);
            None
        }
    }
}

/// A pattern that failed to compile accepts everything; the failure is logged once.
fn matches(pattern: &Option<Regex>, value: &str) -> bool {
    pattern.as_ref().map_or(true, |re| re.is_match(value))
}

pub struct BookingService {
    store: Arc<dyn ClinicStore>,
    config: Arc<AppConfig>,
    availability: AvailabilityService,
}

impl BookingService {
    pub fn new(store: Arc<dyn ClinicStore>, config: Arc<AppConfig>) -> Self {
        let availability = AvailabilityService::new(store.clone(), BreakPolicy::from_config(&config));
        Self {
            store,
            config,
            availability,
        }
    }

    /// Books `request.time` at the clinic for a newly registered patient.
    ///
    /// The slot is re-validated against freshly computed availability, then
    /// patient and appointment are written by one conditional insert. Losing
    /// a race to a concurrent booking surfaces as `AlreadyBooked`.
    pub async fn create_online_booking(
        &self,
        clinic_id: Uuid,
        request: OnlineBookingRequest,
    ) -> Result<Appointment, BookingError> {
        debug!(
            "Online booking request for clinic {} at {} {}",
            clinic_id, request.date, request.time
        );

        let request = validate_request(request)?;

        let clinic = self
            .store
            .get_clinic(clinic_id)
            .await?
            .ok_or(BookingError::ClinicNotFound(clinic_id))?;

        if !clinic.online_booking_enabled {
            return Err(BookingError::BookingDisabled(clinic_id));
        }

        let slots = self.availability.slots_for_clinic(&clinic, request.date).await?;
        let slot = slots
            .iter()
            .find(|slot| slot.time == request.time)
            .ok_or(BookingError::SlotUnavailable {
                date: request.date,
                time: request.time,
                reason: SlotUnavailableReason::NotOffered,
            })?;

        if !slot.available {
            return Err(BookingError::SlotUnavailable {
                date: request.date,
                time: request.time,
                reason: SlotUnavailableReason::AlreadyBooked,
            });
        }

        let duration = self.treatment_duration(&request.treatment).await?;
        let patient = new_patient(&request);
        let appointment = new_appointment(&clinic, &patient, &request, duration);

        let booked = self
            .store
            .insert_booking_if_free(patient, appointment)
            .await
            .map_err(|e| match e {
                StoreError::SlotTaken { date, time, .. } => BookingError::SlotUnavailable {
                    date,
                    time,
                    reason: SlotUnavailableReason::AlreadyBooked,
                },
                other => BookingError::Store(other),
            })?;

        info!(
            "Online booking {} created for clinic {} at {} {}",
            booked.id, clinic_id, booked.date, booked.time
        );

        Ok(booked)
    }

    async fn treatment_duration(&self, treatment: &str) -> Result<u32, BookingError> {
        let catalog = self.store.list_treatments().await?;
        let duration = catalog
            .iter()
            .find(|t| t.name == treatment)
            .map(|t| t.duration)
            .filter(|&minutes| minutes > 0);

        Ok(match duration {
            Some(minutes) => minutes,
            None => {
                let fallback = self.config.default_treatment_duration_minutes;
                warn!(
                    "Unknown treatment {:?}, using default duration of {} minutes",
                    treatment, fallback
                );
                fallback
            }
        })
    }
}

fn validate_request(mut request: OnlineBookingRequest) -> Result<OnlineBookingRequest, BookingError> {
    request.patient_name = request.patient_name.trim().to_string();
    request.patient_phone = request.patient_phone.trim().to_string();
    request.patient_email = request.patient_email.trim().to_string();
    request.treatment = request.treatment.trim().to_string();

    if request.patient_name.is_empty() {
        return Err(BookingError::InvalidRequest("patient_name is required".to_string()));
    }
    if !matches(&PHONE_PATTERN, &request.patient_phone) {
        return Err(BookingError::InvalidRequest(format!(
            "invalid patient_phone: {:?}",
            request.patient_phone
        )));
    }
    let email = &request.patient_email;
    if !email.is_empty() && (email.len() > 254 || !matches(&EMAIL_PATTERN, email)) {
        return Err(BookingError::InvalidRequest(format!(
            "invalid patient_email: {:?}",
            request.patient_email
        )));
    }
    if request.treatment.is_empty() {
        return Err(BookingError::InvalidRequest("treatment is required".to_string()));
    }

    Ok(request)
}

fn new_patient(request: &OnlineBookingRequest) -> Patient {
    Patient {
        id: Uuid::new_v4(),
        name: request.patient_name.clone(),
        age: 0,
        phone: request.patient_phone.clone(),
        email: request.patient_email.clone(),
        address: String::new(),
        last_visit: request.date,
        next_appointment: Some(request.date),
        treatment: request.treatment.clone(),
        status: PatientStatus::Active,
        priority: PatientPriority::Normal,
        total_visits: 1,
        total_spent: 0,
        notes: ONLINE_BOOKING_NOTE.to_string(),
        medical_history: Vec::new(),
    }
}

fn new_appointment(
    clinic: &Clinic,
    patient: &Patient,
    request: &OnlineBookingRequest,
    duration: u32,
) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        clinic_id: Some(clinic.id),
        patient_id: patient.id,
        patient_name: patient.name.clone(),
        date: request.date,
        time: request.time,
        duration,
        treatment: request.treatment.clone(),
        doctor_id: clinic.doctor_id.clone(),
        doctor_name: clinic.doctor_name.clone(),
        status: AppointmentStatus::Scheduled,
        source: AppointmentSource::OnlineBooking,
        notes: None,
        reminder: true,
        patient_phone: Some(patient.phone.clone()),
        patient_email: Some(patient.email.clone()).filter(|email| !email.is_empty()),
    }
}
