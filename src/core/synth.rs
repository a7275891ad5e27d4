//! Expansion of classified rows into calendar events.

use crate::core::rules::ScheduleRules;
use crate::errors::RowError;
use crate::models::{CalendarEvent, OneOffEvent, RecurringEvent, ScheduleRow};
use crate::utils::date::parse_exam_date;
use crate::utils::time::parse_time_range;

/// One `RecurringEvent` per weekday in the row's day code.
///
/// Weekdays whose first date falls after the term end are dropped.
/// A parse failure drops the whole row.
pub fn weekly_meetings(
    course: &str,
    row: &ScheduleRow,
    rules: &ScheduleRules,
) -> Result<Vec<CalendarEvent>, RowError> {
    let range = parse_time_range(&row.time)?;
    let weekdays = rules.days.weekday_indices(&row.days);

    if weekdays.is_empty() {
        return Err(RowError::MalformedRow(format!(
            "no weekday in days '{}'",
            row.days
        )));
    }

    let term = &rules.term;
    let type_code = row.type_code.to_uppercase();
    let title = format!("{course} {type_code}");
    let location = row.location();

    let events = weekdays
        .into_iter()
        .filter_map(|wd| {
            let anchor = term.first_on_or_after(wd);
            if anchor > term.end {
                log::debug!("{title}: no {wd} inside the term, series dropped");
                return None;
            }
            Some(CalendarEvent::Recurring(RecurringEvent {
                title: title.clone(),
                course: course.to_string(),
                type_code: type_code.clone(),
                weekday: wd,
                start: range.start,
                end: range.end,
                anchor,
                window_start: term.start,
                window_end: term.end,
                excluded: term.holidays_on(wd),
                location: location.clone(),
            }))
        })
        .collect();

    Ok(events)
}

/// A single dated event from an exam row ("FI", days "Sa 03/14/2026").
pub fn exam(
    course: &str,
    label: &str,
    row: &ScheduleRow,
) -> Result<CalendarEvent, RowError> {
    let (_, date_text) = row
        .days
        .trim()
        .split_once(' ')
        .ok_or_else(|| RowError::MalformedRow(format!("no date in days '{}'", row.days)))?;

    let date = parse_exam_date(date_text)?;
    let range = parse_time_range(&row.time)?;

    Ok(CalendarEvent::OneOff(OneOffEvent {
        title: format!("{course} {label}"),
        course: course.to_string(),
        type_code: row.type_code.to_uppercase(),
        start: date.and_time(range.start),
        end: date.and_time(range.end),
        location: row.location(),
    }))
}
