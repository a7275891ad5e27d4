use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The single academic term every weekly meeting is projected onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicTerm {
    /// Monday of week 1.
    pub start: NaiveDate,
    /// Last instructional day (inclusive).
    pub end: NaiveDate,
    #[serde(default)]
    pub holidays: BTreeSet<NaiveDate>,
}

impl AcademicTerm {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        holidays: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            start,
            end,
            holidays: holidays.into_iter().collect(),
        }
    }

    /// First date on or after `start` falling on `weekday`.
    pub fn first_on_or_after(&self, weekday: Weekday) -> NaiveDate {
        let from = self.start.weekday().num_days_from_monday();
        let offset = (7 + weekday.num_days_from_monday() - from) % 7;
        self.start + Days::new(u64::from(offset))
    }

    /// Holidays that fall on `weekday`, in date order.
    pub fn holidays_on(&self, weekday: Weekday) -> Vec<NaiveDate> {
        self.holidays
            .iter()
            .filter(|d| d.weekday() == weekday)
            .copied()
            .collect()
    }
}
