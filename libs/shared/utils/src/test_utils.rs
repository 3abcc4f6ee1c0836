use std::sync::Arc;

use axum::{body::to_bytes, response::Response};
use chrono::NaiveDate;
use serde_json::Value;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::{seed, InMemoryStore, StoreSeed};
use shared_models::{
    Appointment, AppointmentSource, AppointmentStatus, BreakTime, Clinic, ClockTime, DayOfWeek,
    DaySchedule, WorkingHours,
};

use crate::state::AppState;

/// 2024-01-22 is a Monday.
pub const MONDAY: (i32, u32, u32) = (2024, 1, 22);
/// 2024-01-26 is a Friday.
pub const FRIDAY: (i32, u32, u32) = (2024, 1, 26);

pub fn test_date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn clock(raw: &str) -> ClockTime {
    raw.parse().expect("valid HH:MM in test")
}

pub struct TestConfig {
    pub break_minute_precision: bool,
    pub seed_demo_data: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            break_minute_precision: false,
            seed_demo_data: false,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            break_minute_precision: self.break_minute_precision,
            seed_demo_data: self.seed_demo_data,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Builder for clinics used across cell tests. Defaults to the
/// 09:00–18:00, 30-minute, 12:00–13:00 break reference clinic.
pub struct TestClinic {
    clinic: Clinic,
}

impl Default for TestClinic {
    fn default() -> Self {
        let mut working_hours = WorkingHours::new();
        for day in DayOfWeek::ALL {
            let schedule = if day == DayOfWeek::Friday {
                DaySchedule::closed()
            } else {
                DaySchedule::open(clock("09:00"), clock("18:00"))
            };
            working_hours.insert(day, schedule);
        }

        Self {
            clinic: Clinic {
                id: Uuid::new_v4(),
                name: "Test Dental Clinic".to_string(),
                name_ar: "عيادة الاختبار".to_string(),
                address: "Test Street".to_string(),
                city: "Baghdad".to_string(),
                governorate: "Baghdad".to_string(),
                phone: "+964 770 000 0000".to_string(),
                email: None,
                latitude: 33.3152,
                longitude: 44.3661,
                rating: 4.0,
                review_count: 10,
                is_promoted: false,
                priority_level: 0,
                is_active: true,
                is_verified: true,
                doctor_id: "doc-test".to_string(),
                doctor_name: "Dr. Test".to_string(),
                specializations: vec!["General Dentistry".to_string()],
                online_booking_enabled: true,
                booking_link: "/simplified-booking/test".to_string(),
                working_hours,
                time_slot_duration: 30,
                break_times: vec![BreakTime { start: clock("12:00"), end: clock("13:00") }],
                accepted_treatments: vec!["Teeth Cleaning".to_string()],
            },
        }
    }
}

impl TestClinic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.clinic.name = name.to_string();
        self
    }

    pub fn doctor(mut self, doctor_id: &str) -> Self {
        self.clinic.doctor_id = doctor_id.to_string();
        self
    }

    pub fn governorate(mut self, governorate: &str) -> Self {
        self.clinic.governorate = governorate.to_string();
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.clinic.latitude = latitude;
        self.clinic.longitude = longitude;
        self
    }

    pub fn rating(mut self, rating: f32, review_count: u32) -> Self {
        self.clinic.rating = rating;
        self.clinic.review_count = review_count;
        self
    }

    pub fn promoted(mut self, priority_level: i32) -> Self {
        self.clinic.is_promoted = true;
        self.clinic.priority_level = priority_level;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.clinic.is_active = false;
        self
    }

    pub fn hours(mut self, day: DayOfWeek, open: &str, close: &str) -> Self {
        self.clinic
            .working_hours
            .insert(day, DaySchedule::open(clock(open), clock(close)));
        self
    }

    pub fn closed_on(mut self, day: DayOfWeek) -> Self {
        self.clinic.working_hours.insert(day, DaySchedule::closed());
        self
    }

    pub fn without_schedule_for(mut self, day: DayOfWeek) -> Self {
        self.clinic.working_hours.remove(&day);
        self
    }

    pub fn slot_duration(mut self, minutes: u32) -> Self {
        self.clinic.time_slot_duration = minutes;
        self
    }

    pub fn breaks(mut self, breaks: &[(&str, &str)]) -> Self {
        self.clinic.break_times = breaks
            .iter()
            .map(|(start, end)| BreakTime { start: clock(start), end: clock(end) })
            .collect();
        self
    }

    pub fn booking_disabled(mut self) -> Self {
        self.clinic.online_booking_enabled = false;
        self
    }

    pub fn build(self) -> Clinic {
        self.clinic
    }
}

/// A manually scheduled appointment holding `time` on `date` for the clinic's doctor.
pub fn manual_appointment(clinic: &Clinic, date: NaiveDate, time: &str) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        clinic_id: Some(clinic.id),
        patient_id: Uuid::new_v4(),
        patient_name: "Walk-in Patient".to_string(),
        date,
        time: clock(time),
        duration: 30,
        treatment: "General Checkup".to_string(),
        doctor_id: clinic.doctor_id.clone(),
        doctor_name: clinic.doctor_name.clone(),
        status: AppointmentStatus::Scheduled,
        source: AppointmentSource::Manual,
        notes: None,
        reminder: false,
        patient_phone: None,
        patient_email: None,
    }
}

pub fn store_with(clinics: Vec<Clinic>) -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::from_seed(StoreSeed {
        clinics,
        treatments: seed::demo_treatments(),
        ..StoreSeed::default()
    }))
}

pub fn state_with(store: Arc<InMemoryStore>) -> AppState {
    AppState::new(TestConfig::default().to_app_config(), store)
}

pub fn demo_state() -> AppState {
    AppState::in_memory(
        TestConfig {
            seed_demo_data: true,
            ..TestConfig::default()
        }
        .to_app_config(),
    )
}

pub async fn read_json(response: Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable response body");
    serde_json::from_slice(&body).expect("JSON response body")
}
