use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

/// All availability windows are expressed in Pacific time, whatever the viewer's locale
pub const REFERENCE_TZ: Tz = chrono_tz::America::Los_Angeles;

/// Convert an instant into the reference timezone
pub fn to_reference_time(now: DateTime<Utc>) -> DateTime<Tz> {
    now.with_timezone(&REFERENCE_TZ)
}

/// Parse a full English weekday name ("Friday"), case-sensitive
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "Sunday" => Some(Weekday::Sun),
        "Monday" => Some(Weekday::Mon),
        "Tuesday" => Some(Weekday::Tue),
        "Wednesday" => Some(Weekday::Wed),
        "Thursday" => Some(Weekday::Thu),
        "Friday" => Some(Weekday::Fri),
        "Saturday" => Some(Weekday::Sat),
        _ => None,
    }
}

/// Full English name of a weekday
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Sort position of a weekday, Sunday first. Unknown days sort last.
pub fn weekday_order(weekday: Option<Weekday>) -> u32 {
    weekday.map_or(99, |day| day.num_days_from_sunday())
}

/// Month number (1-12) of an abbreviated or full English month name, 0 if unknown
pub fn month_order(name: &str) -> u32 {
    match name {
        "Jan" | "January" => 1,
        "Feb" | "February" => 2,
        "Mar" | "March" => 3,
        "Apr" | "April" => 4,
        "May" => 5,
        "Jun" | "June" => 6,
        "Jul" | "July" => 7,
        "Aug" | "August" => 8,
        "Sep" | "Sept" | "September" => 9,
        "Oct" | "October" => 10,
        "Nov" | "November" => 11,
        "Dec" | "December" => 12,
        _ => 0,
    }
}

/// Bring a 12-hour clock string into `h:mma` form.
///
/// `7a` / `9p` shorthand gains its `m`, and a clock without minutes gets
/// `default_minutes` inserted before the meridiem (`7am` -> `7:00am`).
pub fn widen_clock(clock: &str, default_minutes: &str) -> String {
    let mut clock = clock.trim().to_lowercase();
    if clock.ends_with('a') || clock.ends_with('p') {
        clock.push('m');
    }
    if clock.contains(':') {
        return clock;
    }

    let (body, meridiem) = if clock.ends_with("am") || clock.ends_with("pm") {
        clock.split_at(clock.len() - 2)
    } else {
        (clock.as_str(), "")
    };
    format!("{}:{}{}", body.trim_end(), default_minutes, meridiem)
}

/// Parse a clock string in `h:mma` format ("7:00am", "11:59PM")
pub fn parse_clock(clock: &str) -> Option<NaiveTime> {
    let clock = clock.trim().to_lowercase();
    let (body, is_pm) = if let Some(body) = clock.strip_suffix("am") {
        (body, false)
    } else if let Some(body) = clock.strip_suffix("pm") {
        (body, true)
    } else {
        return None;
    };

    let parts: Vec<&str> = body.trim_end().split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 || parts[1].len() != 2 {
        return None;
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Place a wall-clock time on a date in the reference timezone.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant; times in the
/// spring-forward gap do not exist and yield `None`.
pub fn anchor_in_reference_tz(date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
    REFERENCE_TZ
        .from_local_datetime(&date.and_time(time))
        .earliest()
}
