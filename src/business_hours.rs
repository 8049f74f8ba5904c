//! Boutique opening hours and appointment slot arithmetic.
//!
//! The funnel validates requested dates locally before a booking request
//! leaves the client; the booking backend repeats these checks and
//! additionally resolves conflicts.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

/// Appointment slot granularity in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Opening hours as (start, end) pairs, both ends bookable.
fn opening_ranges() -> [(NaiveTime, NaiveTime); 2] {
    [(hm(9, 0), hm(13, 30)), (hm(17, 0), hm(20, 30))]
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("opening hours are valid times")
}

/// Whether the boutique is open on `date` (Monday through Friday).
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether `time` falls inside either opening range.
pub fn is_working_time(time: NaiveTime) -> bool {
    opening_ranges()
        .iter()
        .any(|&(start, end)| start <= time && time <= end)
}

/// Validate a requested appointment against the calendar. `today`
/// anchors the past-date check so callers (and tests) control the
/// clock.
pub fn validate_slot(date: NaiveDate, time: NaiveTime, today: NaiveDate) -> Result<(), String> {
    if date < today {
        return Err("Appointments cannot be booked on past dates.".to_string());
    }
    if !is_working_day(date) {
        return Err(
            "Appointments are only available Monday to Friday. Please pick a weekday.".to_string(),
        );
    }
    if !is_working_time(time) {
        return Err(
            "The selected time is outside opening hours (09:00-13:30 and 17:00-20:30).".to_string(),
        );
    }
    Ok(())
}

/// All bookable slots in a day: every half hour across both opening
/// ranges, range ends included.
pub fn working_time_slots() -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    for (start, end) in opening_ranges() {
        let mut current = start;
        while current <= end {
            slots.push(current);
            current = current + Duration::minutes(SLOT_MINUTES);
        }
    }
    slots
}

/// Slots still open after removing times already booked that day.
pub fn available_slots(booked: &[NaiveTime]) -> Vec<NaiveTime> {
    working_time_slots()
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .collect()
}

/// First working day on or after `from`.
pub fn next_working_day(from: NaiveDate) -> NaiveDate {
    let mut date = from;
    while !is_working_day(date) {
        date = date.succ_opt().expect("date in supported range");
    }
    date
}
