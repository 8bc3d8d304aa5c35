use super::models::TimeSlot;
use crate::error::{availability_error, AppResult};
use crate::utils::time::{
    anchor_in_reference_tz, parse_clock, to_reference_time, weekday_name, widen_clock,
};
use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

/// Whether the slot's window contains `now`, judged in Pacific time.
///
/// Only the weekday name is compared, never the calendar date, so a slot for
/// "Friday Oct 10" also matches every other Friday. Malformed slots are
/// reported as unavailable.
pub fn is_currently_available(slot: &str, now: DateTime<Utc>) -> bool {
    let slot = slot.trim();
    if slot.is_empty() {
        return false;
    }

    let local_now = to_reference_time(now);
    let Some((date_portion, _)) = slot.split_once(':') else {
        return false;
    };
    let day_name = date_portion
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_end_matches(',');
    if day_name != weekday_name(local_now.weekday()) {
        return false;
    }

    match window_contains(slot, now) {
        Ok(contains) => contains,
        Err(e) => {
            debug!("Treating slot {:?} as unavailable: {}", slot, e);
            false
        }
    }
}

/// Check the parenthesized clock range of `slot` against `now`
fn window_contains(slot: &str, now: DateTime<Utc>) -> AppResult<bool> {
    let open = slot
        .find('(')
        .ok_or_else(|| availability_error("missing clock range"))?;
    let close = slot[open..]
        .find(')')
        .map(|offset| open + offset)
        .ok_or_else(|| availability_error("unterminated clock range"))?;

    let range = slot[open + 1..close].trim();
    let range = range.replace("PST", "");
    let range = range.trim();

    let bounds: Vec<&str> = range.split('-').collect();
    if bounds.len() != 2 {
        return Err(availability_error(&format!("malformed clock range {:?}", range)));
    }

    let start = widen_clock(bounds[0], "00");
    let end = widen_clock(bounds[1], "59");
    let start_time = parse_clock(&start)
        .ok_or_else(|| availability_error(&format!("unparseable start time {:?}", start)))?;
    let end_time = parse_clock(&end)
        .ok_or_else(|| availability_error(&format!("unparseable end time {:?}", end)))?;

    let today = to_reference_time(now).date_naive();
    let window_start = anchor_in_reference_tz(today, start_time)
        .ok_or_else(|| availability_error("start time does not exist today"))?;
    let window_end = anchor_in_reference_tz(today, end_time)
        .ok_or_else(|| availability_error("end time does not exist today"))?;

    Ok(window_start.with_timezone(&Utc) < now && now < window_end.with_timezone(&Utc))
}

impl TimeSlot {
    /// Whether this slot is active at `now`
    pub fn is_available_at(&self, now: DateTime<Utc>) -> bool {
        self.has_time_info() && is_currently_available(&self.text, now)
    }
}
