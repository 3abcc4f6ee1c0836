use std::sync::Arc;

use assert_matches::assert_matches;
use booking_cell::{
    AvailabilityService, BookingError, BookingService, BreakPolicy, OnlineBookingRequest,
    SlotUnavailableReason,
};
use shared_database::{AppointmentStore, InMemoryStore, PatientStore};
use shared_models::{AppointmentSource, AppointmentStatus};
use shared_utils::test_utils::{
    clock, manual_appointment, store_with, test_date, TestClinic, TestConfig, FRIDAY, MONDAY,
};
use uuid::Uuid;

fn booking_request(time: &str, treatment: &str) -> OnlineBookingRequest {
    OnlineBookingRequest {
        patient_name: "Zainab Kareem".to_string(),
        patient_phone: "+964 781 555 0101".to_string(),
        patient_email: "zainab@example.com".to_string(),
        date: test_date(MONDAY),
        time: clock(time),
        treatment: treatment.to_string(),
    }
}

fn service(store: Arc<InMemoryStore>) -> BookingService {
    BookingService::new(store, TestConfig::default().to_arc())
}

#[tokio::test]
async fn test_booking_creates_patient_and_appointment() {
    let clinic = TestClinic::new().build();
    let store = store_with(vec![clinic.clone()]);

    let appointment = service(store.clone())
        .create_online_booking(clinic.id, booking_request("10:00", "Teeth Cleaning"))
        .await
        .unwrap();

    assert_eq!(appointment.clinic_id, Some(clinic.id));
    assert_eq!(appointment.doctor_id, clinic.doctor_id);
    assert_eq!(appointment.doctor_name, clinic.doctor_name);
    assert_eq!(appointment.time.to_string(), "10:00");
    assert_eq!(appointment.duration, 45);
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.source, AppointmentSource::OnlineBooking);
    assert!(appointment.reminder);
    assert_eq!(appointment.patient_email.as_deref(), Some("zainab@example.com"));

    let patients = store.list_patients().await.unwrap();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].id, appointment.patient_id);
    assert_eq!(patients[0].name, "Zainab Kareem");
    assert_eq!(store.list_appointments().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_booked_slot_becomes_unavailable() {
    let clinic = TestClinic::new().build();
    let store = store_with(vec![clinic.clone()]);

    service(store.clone())
        .create_online_booking(clinic.id, booking_request("13:30", "Dental Filling"))
        .await
        .unwrap();

    let slots = AvailabilityService::new(store, BreakPolicy::HourTruncated)
        .compute_available_slots(clinic.id, test_date(MONDAY))
        .await;
    let booked = slots.iter().find(|s| s.time.to_string() == "13:30").unwrap();
    assert!(!booked.available);
    assert_eq!(slots.iter().filter(|s| !s.available).count(), 1);
}

#[tokio::test]
async fn test_second_booking_of_same_slot_fails() {
    let clinic = TestClinic::new().build();
    let store = store_with(vec![clinic.clone()]);
    let booking = service(store.clone());

    booking
        .create_online_booking(clinic.id, booking_request("10:00", "Teeth Cleaning"))
        .await
        .unwrap();
    let second = booking
        .create_online_booking(clinic.id, booking_request("10:00", "Teeth Cleaning"))
        .await;

    assert_matches!(
        second,
        Err(BookingError::SlotUnavailable { reason: SlotUnavailableReason::AlreadyBooked, .. })
    );
    assert_eq!(store.list_patients().await.unwrap().len(), 1);
    assert_eq!(store.list_appointments().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_off_grid_time_is_not_offered() {
    let clinic = TestClinic::new().build();
    let store = store_with(vec![clinic.clone()]);

    let result = service(store.clone())
        .create_online_booking(clinic.id, booking_request("12:15", "Teeth Cleaning"))
        .await;

    assert_matches!(
        result,
        Err(BookingError::SlotUnavailable { reason: SlotUnavailableReason::NotOffered, .. })
    );
    assert!(store.list_patients().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_break_time_is_not_offered() {
    let clinic = TestClinic::new().build();
    let store = store_with(vec![clinic.clone()]);

    let result = service(store)
        .create_online_booking(clinic.id, booking_request("12:30", "Teeth Cleaning"))
        .await;

    assert_matches!(
        result,
        Err(BookingError::SlotUnavailable { reason: SlotUnavailableReason::NotOffered, .. })
    );
}

#[tokio::test]
async fn test_manual_appointment_blocks_online_booking() {
    let clinic = TestClinic::new().build();
    let store = store_with(vec![clinic.clone()]);
    store
        .insert_appointment(manual_appointment(&clinic, test_date(MONDAY), "11:00"))
        .await;

    let result = service(store)
        .create_online_booking(clinic.id, booking_request("11:00", "Teeth Cleaning"))
        .await;

    assert_matches!(
        result,
        Err(BookingError::SlotUnavailable { reason: SlotUnavailableReason::AlreadyBooked, .. })
    );
}

#[tokio::test]
async fn test_unknown_clinic_fails() {
    let store = store_with(vec![]);
    let missing = Uuid::new_v4();

    let result = service(store)
        .create_online_booking(missing, booking_request("10:00", "Teeth Cleaning"))
        .await;

    assert_matches!(result, Err(BookingError::ClinicNotFound(id)) if id == missing);
}

#[tokio::test]
async fn test_disabled_booking_fails() {
    let clinic = TestClinic::new().booking_disabled().build();
    let store = store_with(vec![clinic.clone()]);

    let result = service(store.clone())
        .create_online_booking(clinic.id, booking_request("10:00", "Teeth Cleaning"))
        .await;

    assert_matches!(result, Err(BookingError::BookingDisabled(_)));
    assert!(store.list_appointments().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_closed_day_fails() {
    let clinic = TestClinic::new().build();
    let store = store_with(vec![clinic.clone()]);
    let mut request = booking_request("10:00", "Teeth Cleaning");
    request.date = test_date(FRIDAY);

    let result = service(store).create_online_booking(clinic.id, request).await;

    assert_matches!(result, Err(BookingError::ClosedDay { .. }));
}

#[tokio::test]
async fn test_unknown_treatment_uses_default_duration() {
    let clinic = TestClinic::new().build();
    let store = store_with(vec![clinic.clone()]);

    let appointment = service(store)
        .create_online_booking(clinic.id, booking_request("15:00", "Whitening Consultation"))
        .await
        .unwrap();

    assert_eq!(appointment.duration, 30);
    assert_eq!(appointment.treatment, "Whitening Consultation");
}

#[tokio::test]
async fn test_invalid_contact_is_rejected_before_any_write() {
    let clinic = TestClinic::new().build();
    let store = store_with(vec![clinic.clone()]);
    let mut request = booking_request("10:00", "Teeth Cleaning");
    request.patient_email = "not-an-email".to_string();

    let result = service(store.clone()).create_online_booking(clinic.id, request).await;

    assert_matches!(result, Err(BookingError::InvalidRequest(_)));
    assert!(store.list_patients().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_bookings_for_one_slot() {
    let clinic = TestClinic::new().build();
    let store = store_with(vec![clinic.clone()]);
    let booking = Arc::new(service(store.clone()));

    let attempts = (0..12).map(|i| {
        let booking = booking.clone();
        let clinic_id = clinic.id;
        tokio::spawn(async move {
            let mut request = booking_request("16:30", "Teeth Cleaning");
            request.patient_name = format!("Patient {}", i);
            booking.create_online_booking(clinic_id, request).await
        })
    });
    let results: Vec<_> = futures::future::join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    for failure in results.iter().filter_map(|r| r.as_ref().err()) {
        assert_matches!(
            failure,
            BookingError::SlotUnavailable { reason: SlotUnavailableReason::AlreadyBooked, .. }
        );
    }
    assert_eq!(store.list_appointments().await.unwrap().len(), 1);
    assert_eq!(store.list_patients().await.unwrap().len(), 1);
}
