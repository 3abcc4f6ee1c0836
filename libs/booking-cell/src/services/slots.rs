use shared_config::AppConfig;
use shared_models::{BreakTime, ClockTime, DaySchedule};

/// How a candidate start time is tested against a clinic break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakPolicy {
    /// Break endpoints keep only their hour, so 11:30–12:30 blocks 11:00–12:00.
    #[default]
    HourTruncated,
    /// Break endpoints are compared at full minute precision.
    Precise,
}

impl BreakPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        if config.break_minute_precision {
            BreakPolicy::Precise
        } else {
            BreakPolicy::HourTruncated
        }
    }

    fn bounds(self, break_time: &BreakTime) -> (u32, u32) {
        match self {
            BreakPolicy::HourTruncated => (break_time.start.hour() * 60, break_time.end.hour() * 60),
            BreakPolicy::Precise => (break_time.start.minutes(), break_time.end.minutes()),
        }
    }

    /// Half-open containment: a slot starting exactly at the break end is kept.
    pub fn is_within(self, break_time: &BreakTime, start: ClockTime) -> bool {
        let (from, to) = self.bounds(break_time);
        let minutes = start.minutes();
        minutes >= from && minutes < to
    }
}

/// Start times for one open day: consecutive fixed-length slots from `open`
/// that end no later than `close`, minus any that start inside a break.
pub fn slot_start_times(
    schedule: &DaySchedule,
    slot_duration: u32,
    breaks: &[BreakTime],
    policy: BreakPolicy,
) -> Vec<ClockTime> {
    if !schedule.is_open || slot_duration == 0 {
        return Vec::new();
    }

    let close = schedule.close.minutes();
    let mut cursor = schedule.open.minutes();
    let mut starts = Vec::new();

    while let Some(end) = cursor.checked_add(slot_duration) {
        if end > close {
            break;
        }
        let Some(start) = ClockTime::from_minutes(cursor) else {
            break;
        };
        if !breaks.iter().any(|b| policy.is_within(b, start)) {
            starts.push(start);
        }
        cursor = end;
    }

    starts
}
