//! Time utilities: parsing WebReg time tokens ("10:00a") and ranges ("10:00a-10:50a").

use crate::errors::RowError;
use chrono::NaiveTime;

/// Start/end pair as printed in the source. `end > start` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Parse a 12-hour token whose last character is the AM/PM marker:
/// `a` for AM, `p` for PM (case-insensitive).
///
/// Empty input and placeholders such as "TBA" are errors.
pub fn parse_time_of_day(token: &str) -> Result<NaiveTime, RowError> {
    let t = token.trim().to_lowercase();
    let invalid = || RowError::InvalidTimeFormat(token.trim().to_string());

    if t.is_empty() || t == "tba" {
        return Err(invalid());
    }

    let (body, suffix) = match t.strip_suffix('a') {
        Some(body) => (body, "AM"),
        None => match t.strip_suffix('p') {
            Some(body) => (body, "PM"),
            None => return Err(invalid()),
        },
    };

    // "%I:%M%p" alone would also accept things like "1:5"; require H:MM / HH:MM.
    let (hours, minutes) = body.split_once(':').ok_or_else(invalid)?;
    let well_formed = (1..=2).contains(&hours.len())
        && minutes.len() == 2
        && hours.chars().all(|c| c.is_ascii_digit())
        && minutes.chars().all(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    NaiveTime::parse_from_str(&format!("{body}{suffix}"), "%I:%M%p").map_err(|_| invalid())
}

/// Parse "start-end", splitting on the first hyphen.
pub fn parse_time_range(s: &str) -> Result<TimeRange, RowError> {
    let invalid = || RowError::InvalidTimeFormat(s.trim().to_string());

    let (start_raw, end_raw) = s.split_once('-').ok_or_else(invalid)?;
    let (start_raw, end_raw) = (start_raw.trim(), end_raw.trim());
    if start_raw.is_empty() || end_raw.is_empty() {
        return Err(invalid());
    }

    Ok(TimeRange {
        start: parse_time_of_day(start_raw)?,
        end: parse_time_of_day(end_raw)?,
    })
}

/// "HH:MM:SS", the wall-clock form used by the preview output.
pub fn format_clock(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Compact "10:00a" form, as printed by WebReg.
pub fn format_short(t: NaiveTime) -> String {
    let s = t.format("%-I:%M%P").to_string();
    // "%P" yields "am"/"pm"; WebReg keeps only the first letter.
    s.trim_end_matches('m').to_string()
}
