use crate::errors::RowError;
use chrono::{NaiveDate, NaiveDateTime};

/// Exam dates are printed as MM/DD/YYYY.
pub fn parse_exam_date(s: &str) -> Result<NaiveDate, RowError> {
    NaiveDate::parse_from_str(s.trim(), "%m/%d/%Y")
        .map_err(|_| RowError::InvalidDateFormat(s.trim().to_string()))
}

/// Basic iCalendar form: `YYYYMMDDTHHMMSS`.
pub fn ics_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// ISO-8601 local timestamp without offset: `YYYY-MM-DDTHH:MM:SS`.
pub fn iso_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}
