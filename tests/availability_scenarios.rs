use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::Los_Angeles;
use ohack_availability::availability::models::period_order;
use ohack_availability::availability::{
    is_currently_available, parse_availability, AvailabilityInput, TimePeriod, TimeSlot,
};
use ohack_availability::utils::time::weekday_order;

const EARLY: &str = "Friday Oct 10: 🌅 Early Morning (7am - 9am PST)";

/// Instant for a Pacific wall-clock time in October 2025
fn pacific(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Los_Angeles
        .with_ymd_and_hms(2025, 10, day, hour, minute, 0)
        .single()
        .unwrap()
        .with_timezone(&Utc)
}

fn parse_text(text: &str) -> Vec<TimeSlot> {
    parse_availability(Some(&AvailabilityInput::from(text)))
}

/// Friday at 8:00am is inside the early morning window
#[test]
fn test_available_friday_morning() {
    assert!(is_currently_available(EARLY, pacific(10, 8, 0)));
}

/// Friday at 10:00am is past the 9:59am end
#[test]
fn test_unavailable_after_window() {
    assert!(!is_currently_available(EARLY, pacific(10, 10, 0)));
}

/// Saturday at 8:00am has the wrong weekday
#[test]
fn test_unavailable_on_other_weekday() {
    assert!(!is_currently_available(EARLY, pacific(11, 8, 0)));
}

/// Array entries parse to the same slot as their legacy text
#[test]
fn test_array_entry_matches_legacy_text() {
    let from_days = parse_availability(Some(&AvailabilityInput::Days(vec![
        "Friday Oct 10-Early Morning".to_string(),
    ])));
    let from_text = parse_text(EARLY);

    assert_eq!(from_days.len(), 1);
    assert_eq!(from_days, from_text);
    assert_eq!(from_days[0].display_label, "Oct 10 · (7am - 9am PST)");
    assert_eq!(from_days[0].clock_range.as_deref(), Some("7am - 9am PST"));
}

/// Garbled text becomes one raw fallback slot that is never available
#[test]
fn test_garbled_text_falls_back() {
    let slots = parse_text("garbled nonsense with no colon");
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].display_label, "garbled nonsense with no colon");
    assert_eq!(slots[0].time_period, None);

    assert!(!is_currently_available(&slots[0].display_label, pacific(10, 8, 0)));
    assert!(!slots[0].is_available_at(pacific(10, 8, 0)));
}

#[test]
fn test_empty_inputs() {
    assert!(parse_availability(None).is_empty());
    assert!(parse_text("").is_empty());
}

/// One slot per comma-delimited group, in weekday then time-of-day order
#[test]
fn test_slot_count_and_sort_order() {
    let text = "Sunday Oct 12: 🏙️ Afternoon (1pm - 3pm PST), \
                Saturday Oct 11: 🌙 Late Night (11pm - 2am PST), \
                Saturday Oct 11: 🌅 Early Morning (7am - 9am PST), \
                Friday Oct 10: 🌆 Evening (5pm - 8pm PST), \
                Friday Oct 10: ☀️ Morning (9am - 12pm PST)";
    let slots = parse_text(text);
    assert_eq!(slots.len(), 5);

    for pair in slots.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let (day_a, day_b) = (weekday_order(a.weekday), weekday_order(b.weekday));
        assert!(
            day_a < day_b
                || (day_a == day_b && period_order(a.time_period) <= period_order(b.time_period))
        );
    }

    // Sunday sorts first in the week
    assert_eq!(slots[0].time_period, Some(TimePeriod::Afternoon));
    assert_eq!(slots[4].time_period, Some(TimePeriod::LateNight));
}

#[test]
fn test_parse_is_idempotent() {
    let text = "Friday, Oct 10: 🌅 Early Morning (7am - 9am PST), Friday, Oct 10: 🌃 Night (8pm - 11pm PST)";
    assert_eq!(parse_text(text), parse_text(text));
}

/// A weekday mismatch wins over any clock range
#[test]
fn test_weekday_mismatch_never_available() {
    let slots = parse_text(
        "Monday Oct 13: 🌅 Early Morning (7am - 9am PST), Monday Oct 13: ☀️ Morning (12am - 11pm PST)",
    );
    for hour in [1, 8, 12, 22] {
        let now = pacific(10, hour, 30);
        assert!(slots.iter().all(|slot| !slot.is_available_at(now)));
    }
}

#[test]
fn test_volunteer_json_round_through_parser() {
    let volunteer: ohack_availability::volunteers::Volunteer = serde_json::from_str(
        r#"{
            "name": "Grace",
            "isSelected": true,
            "volunteer_type": "mentor",
            "availability": "Friday Oct 10: 🌅 Early Morning (7am - 9am PST)",
            "availableDays": ["Saturday Oct 11-Night", "Friday Oct 10-Early Morning"]
        }"#,
    )
    .unwrap();

    let slots = parse_availability(volunteer.availability_input());
    let texts: Vec<&str> = slots.iter().map(|slot| slot.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![EARLY, "Saturday Oct 11: 🌃 Night (8pm - 11pm PST)"]
    );
}
