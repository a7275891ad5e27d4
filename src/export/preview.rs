// src/export/preview.rs

use crate::models::{CalendarEvent, RecurringEvent};
use crate::utils::date::iso_datetime;
use crate::utils::time::format_clock;
use clap::ValueEnum;
use serde::Serialize;

/// Event records for the web calendar widget (FullCalendar field names).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum PreviewEvent {
    #[serde(rename_all = "camelCase")]
    Recurring {
        title: String,
        /// Sunday = 0 ... Saturday = 6.
        days_of_week: Vec<u32>,
        start_time: String,
        end_time: String,
        start_recur: String,
        end_recur: String,
    },
    OneOff {
        title: String,
        start: String,
        end: String,
        location: String,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PreviewMode {
    /// One record per weekly series; holidays are NOT suppressed
    #[default]
    Recurring,
    /// One record per concrete meeting; holidays suppressed
    Expanded,
}

/// The JSON body returned by the conversion endpoint.
#[derive(Serialize, Clone, Debug)]
pub struct ConversionBundle {
    pub ok: bool,
    pub filename: String,
    pub ics: String,
    pub events: Vec<PreviewEvent>,
}

fn recurring_record(e: &RecurringEvent) -> PreviewEvent {
    PreviewEvent::Recurring {
        title: e.title.clone(),
        days_of_week: vec![e.weekday.num_days_from_sunday()],
        start_time: format_clock(e.start),
        end_time: format_clock(e.end),
        start_recur: e.window_start.format("%Y-%m-%d").to_string(),
        end_recur: e.window_end.format("%Y-%m-%d").to_string(),
    }
}

fn expanded_records(e: &RecurringEvent) -> Vec<PreviewEvent> {
    e.occurrences()
        .into_iter()
        .map(|d| PreviewEvent::OneOff {
            title: e.title.clone(),
            start: iso_datetime(d.and_time(e.start)),
            end: iso_datetime(d.and_time(e.end)),
            location: e.location.clone(),
        })
        .collect()
}

pub fn render_preview(events: &[CalendarEvent], mode: PreviewMode) -> Vec<PreviewEvent> {
    events
        .iter()
        .flat_map(|ev| match (ev, mode) {
            (CalendarEvent::Recurring(e), PreviewMode::Recurring) => vec![recurring_record(e)],
            (CalendarEvent::Recurring(e), PreviewMode::Expanded) => expanded_records(e),
            (CalendarEvent::OneOff(e), _) => vec![PreviewEvent::OneOff {
                title: e.title.clone(),
                start: iso_datetime(e.start),
                end: iso_datetime(e.end),
                location: e.location.clone(),
            }],
        })
        .collect()
}
