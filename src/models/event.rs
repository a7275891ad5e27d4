use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

/// A synthesized calendar entry, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarEvent {
    Recurring(RecurringEvent),
    OneOff(OneOffEvent),
}

/// A weekly meeting on a single weekday.
///
/// Multi-day codes ("MWF") produce one `RecurringEvent` per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurringEvent {
    pub title: String,
    pub course: String,
    pub type_code: String,
    pub weekday: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// First occurrence: the first `weekday` on/after the term start.
    pub anchor: NaiveDate,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub excluded: Vec<NaiveDate>,
    pub location: String,
}

/// A dated exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OneOffEvent {
    pub title: String,
    pub course: String,
    pub type_code: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub location: String,
}

impl RecurringEvent {
    /// Concrete meeting dates: weekly from the anchor up to the window end,
    /// minus excluded dates.
    pub fn occurrences(&self) -> Vec<NaiveDate> {
        let mut out = Vec::new();
        let mut d = self.anchor;

        while d <= self.window_end {
            if !self.excluded.contains(&d) {
                out.push(d);
            }
            match d.checked_add_days(Days::new(7)) {
                Some(next) => d = next,
                None => break,
            }
        }

        out
    }

    pub fn first_start(&self) -> NaiveDateTime {
        self.anchor.and_time(self.start)
    }

    pub fn first_end(&self) -> NaiveDateTime {
        self.anchor.and_time(self.end)
    }
}

impl CalendarEvent {
    pub fn title(&self) -> &str {
        match self {
            CalendarEvent::Recurring(e) => &e.title,
            CalendarEvent::OneOff(e) => &e.title,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            CalendarEvent::Recurring(e) => &e.location,
            CalendarEvent::OneOff(e) => &e.location,
        }
    }

    /// Identity used to build the calendar UID.
    pub fn uid_seed(&self) -> String {
        match self {
            CalendarEvent::Recurring(e) => format!(
                "{}-{}-{}",
                e.course,
                e.type_code,
                e.weekday.num_days_from_monday()
            ),
            CalendarEvent::OneOff(e) => format!(
                "{}-{}-{}",
                e.course,
                e.type_code,
                e.start.date().format("%Y-%m-%d")
            ),
        }
    }
}
