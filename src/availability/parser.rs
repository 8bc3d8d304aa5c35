use super::models::{AvailabilityInput, RawFallback, TimePeriod, TimeSlot};
use crate::utils::time::parse_weekday;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

lazy_static! {
    /// "<Weekday>[,] <Month> <Day>: <body>", where the body runs to the next comma
    /// outside parentheses
    static ref SLOT_PATTERN: Regex = Regex::new(
        r"[A-Za-z]+,?\s+[A-Za-z]+\.?\s+\d{1,2}:\s*(?:[^,(]|\([^()]*\))+"
    )
    .expect("slot pattern is valid");

    static ref EMOJI_PERIOD_PATTERN: Regex = Regex::new(concat!(
        r"🌅\x{FE0F}?\s*(?P<early_morning>Early Morning)",
        r"|☀\x{FE0F}?\s*(?P<morning>Morning)",
        r"|🏙\x{FE0F}?\s*(?P<afternoon>Afternoon)",
        r"|🌆\x{FE0F}?\s*(?P<evening>Evening)",
        r"|🌃\x{FE0F}?\s*(?P<night>Night)",
        r"|🌙\x{FE0F}?\s*(?P<late_night>Late Night)",
    ))
    .expect("emoji period pattern is valid");

    static ref BARE_PERIOD_PATTERN: Regex = Regex::new(
        r"\b(Early Morning|Late Night|Morning|Afternoon|Evening|Night)\b"
    )
    .expect("bare period pattern is valid");

    static ref CLOCK_RANGE_PATTERN: Regex = Regex::new(r"\(([^)]*)\)")
        .expect("clock range pattern is valid");
}

/// Turns one slot string into a [`TimeSlot`], or hands it back as a raw fallback
pub trait SlotParser {
    fn parse_slot(&self, raw: &str) -> Result<TimeSlot, RawFallback>;
}

/// The regex tokenizer used for both legacy and rebuilt array entries
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexSlotParser;

impl SlotParser for RegexSlotParser {
    fn parse_slot(&self, raw: &str) -> Result<TimeSlot, RawFallback> {
        parse_slot_string(raw)
    }
}

/// Parse a volunteer's availability into sorted, de-duplicated slots.
///
/// Never fails: missing or unrecognized input yields an empty list, and slot
/// strings that cannot be decomposed are kept as raw fallbacks.
pub fn parse_availability(raw: Option<&AvailabilityInput>) -> Vec<TimeSlot> {
    parse_availability_with(&RegexSlotParser, raw)
}

/// [`parse_availability`] with a caller-supplied slot tokenizer
pub fn parse_availability_with<P>(parser: &P, raw: Option<&AvailabilityInput>) -> Vec<TimeSlot>
where
    P: SlotParser + ?Sized,
{
    let Some(input) = raw else {
        return Vec::new();
    };
    if let AvailabilityInput::Unrecognized(value) = input {
        debug!("Ignoring availability of unrecognized shape: {}", value);
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut slots: Vec<TimeSlot> = normalize_input(input)
        .iter()
        .map(|entry| match parser.parse_slot(entry) {
            Ok(slot) => slot,
            Err(fallback) => {
                debug!("Keeping raw availability slot {:?}: {}", fallback.text, fallback.reason);
                fallback.into()
            }
        })
        .filter(|slot| seen.insert(slot.text.clone()))
        .collect();

    slots.sort_by_key(TimeSlot::sort_key);
    slots
}

/// Reduce either input shape to a list of legacy-format slot strings
pub fn normalize_input(input: &AvailabilityInput) -> Vec<String> {
    match input {
        AvailabilityInput::Text(text) => split_legacy(text),
        AvailabilityInput::Days(days) => days
            .iter()
            .map(|day| day.trim())
            .filter(|day| !day.is_empty())
            .map(rebuild_day_entry)
            .collect(),
        AvailabilityInput::Unrecognized(_) => Vec::new(),
    }
}

/// Rebuild "Friday Oct 10-Early Morning" as
/// "Friday Oct 10: 🌅 Early Morning (7am - 9am PST)".
///
/// Entries whose period name is not recognized are returned unchanged.
pub fn rebuild_day_entry(entry: &str) -> String {
    let entry = entry.trim();
    let rebuilt = entry.split_once('-').and_then(|(day, period)| {
        let period = TimePeriod::from_label(period.trim())?;
        Some(format!(
            "{}: {} {} ({} PST)",
            day.trim(),
            period.emoji(),
            period.label(),
            period.clock_range()
        ))
    });
    rebuilt.unwrap_or_else(|| entry.to_string())
}

/// Split legacy availability text into slot strings
pub fn split_legacy(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let matched: Vec<String> = SLOT_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect();
    if !matched.is_empty() {
        return matched;
    }

    text.split(", ")
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decompose one slot string into its day, date label, period and clock range
pub fn parse_slot_string(raw: &str) -> Result<TimeSlot, RawFallback> {
    let text = raw.trim();
    let (date_portion, rest) =
        split_at_date_colon(text).ok_or_else(|| RawFallback::new(text, "no date separator"))?;

    let date_portion = date_portion.trim();
    let (first, remainder) = date_portion
        .split_once(char::is_whitespace)
        .unwrap_or((date_portion, ""));
    let day_name = first.trim_end_matches(',');
    if day_name.is_empty() {
        return Err(RawFallback::new(text, "empty date portion"));
    }
    let date_label = remainder.trim_start_matches(|c: char| c == ',' || c.is_whitespace());

    let time_period = find_time_period(rest).ok_or_else(|| RawFallback::new(text, "no time period"))?;

    let clock_range = CLOCK_RANGE_PATTERN
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .map(|range| range.as_str().trim().to_string())
        .filter(|range| !range.is_empty())
        .unwrap_or_else(|| format!("{} PST", time_period.clock_range()));

    Ok(TimeSlot {
        text: text.to_string(),
        day_name: day_name.to_string(),
        weekday: parse_weekday(day_name),
        date_label: date_label.to_string(),
        time_period: Some(time_period),
        display_label: format!("{} · ({})", date_label, clock_range),
        clock_range: Some(clock_range),
    })
}

/// Split at the first colon that is followed by whitespace or ends the text,
/// so clock times like "7:30am" never count as the date separator
fn split_at_date_colon(text: &str) -> Option<(&str, &str)> {
    text.char_indices()
        .find(|&(i, c)| {
            c == ':'
                && text[i + 1..]
                    .chars()
                    .next()
                    .map_or(true, char::is_whitespace)
        })
        .map(|(i, _)| (&text[..i], &text[i + 1..]))
}

fn find_time_period(text: &str) -> Option<TimePeriod> {
    if let Some(caps) = EMOJI_PERIOD_PATTERN.captures(text) {
        let named = [
            ("early_morning", TimePeriod::EarlyMorning),
            ("morning", TimePeriod::Morning),
            ("afternoon", TimePeriod::Afternoon),
            ("evening", TimePeriod::Evening),
            ("night", TimePeriod::Night),
            ("late_night", TimePeriod::LateNight),
        ];
        if let Some((_, period)) = named.iter().find(|(name, _)| caps.name(name).is_some()) {
            return Some(*period);
        }
    }

    BARE_PERIOD_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|label| TimePeriod::from_label(label.as_str()))
}
