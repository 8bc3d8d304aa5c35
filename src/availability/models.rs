use crate::utils::time::weekday_order;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One of the six fixed segments a hackathon day is split into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimePeriod {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    Night,
    LateNight,
}

impl TimePeriod {
    /// All periods in intra-day order
    pub const ALL: [TimePeriod; 6] = [
        TimePeriod::EarlyMorning,
        TimePeriod::Morning,
        TimePeriod::Afternoon,
        TimePeriod::Evening,
        TimePeriod::Night,
        TimePeriod::LateNight,
    ];

    /// Label as it appears in availability text
    pub fn label(self) -> &'static str {
        match self {
            TimePeriod::EarlyMorning => "Early Morning",
            TimePeriod::Morning => "Morning",
            TimePeriod::Afternoon => "Afternoon",
            TimePeriod::Evening => "Evening",
            TimePeriod::Night => "Night",
            TimePeriod::LateNight => "Late Night",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            TimePeriod::EarlyMorning => "🌅",
            TimePeriod::Morning => "☀️",
            TimePeriod::Afternoon => "🏙️",
            TimePeriod::Evening => "🌆",
            TimePeriod::Night => "🌃",
            TimePeriod::LateNight => "🌙",
        }
    }

    /// Canonical Pacific clock range, without the timezone suffix
    pub fn clock_range(self) -> &'static str {
        match self {
            TimePeriod::EarlyMorning => "7am - 9am",
            TimePeriod::Morning => "9am - 12pm",
            TimePeriod::Afternoon => "1pm - 3pm",
            TimePeriod::Evening => "5pm - 8pm",
            TimePeriod::Night => "8pm - 11pm",
            TimePeriod::LateNight => "11pm - 2am",
        }
    }

    /// Sort position within a day, starting at 1
    pub fn order(self) -> u32 {
        match self {
            TimePeriod::EarlyMorning => 1,
            TimePeriod::Morning => 2,
            TimePeriod::Afternoon => 3,
            TimePeriod::Evening => 4,
            TimePeriod::Night => 5,
            TimePeriod::LateNight => 6,
        }
    }

    /// Exact, case-sensitive label lookup
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|period| period.label() == label)
    }
}

/// Sort position of an optional period. Unknown periods sort last.
pub fn period_order(period: Option<TimePeriod>) -> u32 {
    period.map_or(99, TimePeriod::order)
}

/// A single (day, time period) availability entry for one volunteer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Canonical slot text, e.g. "Friday Oct 10: 🌅 Early Morning (7am - 9am PST)"
    pub text: String,
    /// First token of the date portion; empty for raw fallbacks
    pub day_name: String,
    pub weekday: Option<Weekday>,
    /// Remainder of the date portion, e.g. "Oct 10"
    pub date_label: String,
    pub time_period: Option<TimePeriod>,
    /// Parenthesized clock range, e.g. "7am - 9am PST"
    pub clock_range: Option<String>,
    pub display_label: String,
}

impl TimeSlot {
    /// Whether the slot names a recognized time period
    pub fn has_time_info(&self) -> bool {
        self.time_period.is_some()
    }

    /// Sort key: weekday first, then time of day
    pub fn sort_key(&self) -> (u32, u32) {
        (weekday_order(self.weekday), period_order(self.time_period))
    }
}

/// A slot string the tokenizer could not decompose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFallback {
    pub text: String,
    pub reason: &'static str,
}

impl RawFallback {
    pub fn new(text: impl Into<String>, reason: &'static str) -> Self {
        Self {
            text: text.into(),
            reason,
        }
    }
}

impl From<RawFallback> for TimeSlot {
    fn from(fallback: RawFallback) -> Self {
        TimeSlot {
            display_label: fallback.text.clone(),
            text: fallback.text,
            day_name: String::new(),
            weekday: None,
            date_label: String::new(),
            time_period: None,
            clock_range: None,
        }
    }
}

/// Wire shapes of a volunteer's `availability` / `availableDays` fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AvailabilityInput {
    /// Legacy comma-separated text
    Text(String),
    /// Newer "<day label>-<period name>" entries
    Days(Vec<String>),
    /// Anything else the backend might send
    Unrecognized(serde_json::Value),
}

impl AvailabilityInput {
    /// True when there is nothing to parse
    pub fn is_blank(&self) -> bool {
        match self {
            AvailabilityInput::Text(text) => text.trim().is_empty(),
            AvailabilityInput::Days(days) => days.iter().all(|day| day.trim().is_empty()),
            AvailabilityInput::Unrecognized(_) => true,
        }
    }
}

impl From<&str> for AvailabilityInput {
    fn from(text: &str) -> Self {
        AvailabilityInput::Text(text.to_string())
    }
}

impl From<String> for AvailabilityInput {
    fn from(text: String) -> Self {
        AvailabilityInput::Text(text)
    }
}

impl From<Vec<String>> for AvailabilityInput {
    fn from(days: Vec<String>) -> Self {
        AvailabilityInput::Days(days)
    }
}
