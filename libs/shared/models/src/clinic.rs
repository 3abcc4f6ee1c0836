use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

/// A wall-clock time of day in 24-hour `HH:MM` form, stored as minutes since midnight.
/// `24:00` is accepted as the end of the day, so a clinic can close at midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockTimeError {
    #[error("expected HH:MM, got {0:?}")]
    Format(String),

    #[error("time out of range: {0:?}")]
    OutOfRange(String),
}

impl ClockTime {
    pub const MINUTES_PER_DAY: u32 = 24 * 60;

    pub const END_OF_DAY: ClockTime = ClockTime(Self::MINUTES_PER_DAY as u16);

    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        Self::from_minutes(hour.checked_mul(60)?.checked_add(minute)?)
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes <= Self::MINUTES_PER_DAY {
            Some(Self(minutes as u16))
        } else {
            None
        }
    }

    pub fn minutes(self) -> u32 {
        self.0 as u32
    }

    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| ClockTimeError::Format(s.to_string()))?;

        let valid_part = |part: &str, max_len: usize| {
            !part.is_empty() && part.len() <= max_len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !valid_part(hour, 2) || minute.len() != 2 || !valid_part(minute, 2) {
            return Err(ClockTimeError::Format(s.to_string()));
        }

        let hour: u32 = hour.parse().map_err(|_| ClockTimeError::Format(s.to_string()))?;
        let minute: u32 = minute.parse().map_err(|_| ClockTimeError::Format(s.to_string()))?;

        Self::new(hour, minute).ok_or_else(|| ClockTimeError::OutOfRange(s.to_string()))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Weekday keys used in clinic working hours. Names are fixed English,
/// independent of host locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "sunday",
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayOfWeek::Sunday,
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub open: ClockTime,
    pub close: ClockTime,
    pub is_open: bool,
}

impl DaySchedule {
    pub fn open(open: ClockTime, close: ClockTime) -> Self {
        Self { open, close, is_open: true }
    }

    pub fn closed() -> Self {
        let midnight = ClockTime::default();
        Self { open: midnight, close: midnight, is_open: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakTime {
    pub start: ClockTime,
    pub end: ClockTime,
}

pub type WorkingHours = BTreeMap<DayOfWeek, DaySchedule>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clinic {
    pub id: Uuid,
    pub name: String,
    pub name_ar: String,
    pub address: String,
    pub city: String,
    pub governorate: String,
    pub phone: String,
    pub email: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f32,
    pub review_count: u32,
    pub is_promoted: bool,
    pub priority_level: i32,
    pub is_active: bool,
    pub is_verified: bool,
    pub doctor_id: String,
    pub doctor_name: String,
    pub specializations: Vec<String>,
    pub online_booking_enabled: bool,
    pub booking_link: String,
    pub working_hours: WorkingHours,
    pub time_slot_duration: u32,
    #[serde(default)]
    pub break_times: Vec<BreakTime>,
    pub accepted_treatments: Vec<String>,
}

impl Clinic {
    pub fn schedule_for(&self, day: DayOfWeek) -> Option<&DaySchedule> {
        self.working_hours.get(&day)
    }
}

/// Partial update of the booking-related clinic fields. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingSettingsUpdate {
    pub online_booking_enabled: Option<bool>,
    pub working_hours: Option<WorkingHours>,
    pub time_slot_duration: Option<u32>,
    pub break_times: Option<Vec<BreakTime>>,
    pub accepted_treatments: Option<Vec<String>>,
}

impl BookingSettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.online_booking_enabled.is_none()
            && self.working_hours.is_none()
            && self.time_slot_duration.is_none()
            && self.break_times.is_none()
            && self.accepted_treatments.is_none()
    }

    pub fn apply_to(self, clinic: &mut Clinic) {
        if let Some(enabled) = self.online_booking_enabled {
            clinic.online_booking_enabled = enabled;
        }
        if let Some(hours) = self.working_hours {
            clinic.working_hours = hours;
        }
        if let Some(duration) = self.time_slot_duration {
            clinic.time_slot_duration = duration;
        }
        if let Some(breaks) = self.break_times {
            clinic.break_times = breaks;
        }
        if let Some(treatments) = self.accepted_treatments {
            clinic.accepted_treatments = treatments;
        }
    }
}
