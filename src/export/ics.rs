// src/export/ics.rs

use crate::models::{CalendarEvent, OneOffEvent, RecurringEvent};
use crate::utils::date::ics_datetime;
use chrono::NaiveDateTime;
use std::collections::HashMap;

const CRLF: &str = "\r\n";
const MAX_LINE_OCTETS: usize = 75;

/// Fixed identity of the generated calendar.
#[derive(Debug, Clone)]
pub struct IcsOptions {
    /// Suffix after '@' in every UID.
    pub uid_domain: String,
    /// Product name used in PRODID.
    pub product: String,
}

impl Default for IcsOptions {
    fn default() -> Self {
        Self {
            uid_domain: "webreg".to_string(),
            product: "webreg2ics".to_string(),
        }
    }
}

/// Escape a TEXT value (RFC 5545 §3.3.11).
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Fold a content line at 75 octets, never splitting a UTF-8 sequence.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut used = 0;
    // Continuation lines start with a space, which counts toward the limit.
    let mut limit = MAX_LINE_OCTETS;

    for c in line.chars() {
        let n = c.len_utf8();
        if used + n > limit {
            out.push_str(CRLF);
            out.push(' ');
            used = 0;
            limit = MAX_LINE_OCTETS - 1;
        }
        out.push(c);
        used += n;
    }

    out
}

/// Hands out UIDs, suffixing "-N" when a seed repeats within a document.
struct UidAllocator<'a> {
    domain: &'a str,
    seen: HashMap<String, usize>,
}

impl<'a> UidAllocator<'a> {
    fn new(domain: &'a str) -> Self {
        Self {
            domain,
            seen: HashMap::new(),
        }
    }

    fn next(&mut self, seed: &str) -> String {
        let base: String = seed
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            format!("{base}@{}", self.domain)
        } else {
            format!("{base}-{count}@{}", self.domain)
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(&fold_line(line));
    out.push_str(CRLF);
}

fn recurring_lines(e: &RecurringEvent) -> Vec<String> {
    let mut lines = vec![
        format!("DTSTART:{}", ics_datetime(e.first_start())),
        format!("DTEND:{}", ics_datetime(e.first_end())),
        format!(
            "RRULE:FREQ=WEEKLY;UNTIL={}T235959",
            e.window_end.format("%Y%m%d")
        ),
    ];

    if !e.excluded.is_empty() {
        let stamps: Vec<String> = e
            .excluded
            .iter()
            .map(|d| ics_datetime(d.and_time(e.start)))
            .collect();
        lines.push(format!("EXDATE:{}", stamps.join(",")));
    }

    lines
}

fn one_off_lines(e: &OneOffEvent) -> Vec<String> {
    vec![
        format!("DTSTART:{}", ics_datetime(e.start)),
        format!("DTEND:{}", ics_datetime(e.end)),
    ]
}

/// Render the whole calendar. `stamp` becomes every DTSTAMP, so the output
/// depends only on its arguments.
pub fn render_ics(events: &[CalendarEvent], stamp: NaiveDateTime, opts: &IcsOptions) -> String {
    let mut out = String::new();
    let mut uids = UidAllocator::new(&opts.uid_domain);
    let dtstamp = ics_datetime(stamp);

    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:-//{}//EN", opts.product));
    push_line(&mut out, "CALSCALE:GREGORIAN");

    for ev in events {
        push_line(&mut out, "BEGIN:VEVENT");
        push_line(&mut out, &format!("UID:{}", uids.next(&ev.uid_seed())));
        push_line(&mut out, &format!("DTSTAMP:{dtstamp}"));

        let timing = match ev {
            CalendarEvent::Recurring(e) => recurring_lines(e),
            CalendarEvent::OneOff(e) => one_off_lines(e),
        };
        for line in &timing {
            push_line(&mut out, line);
        }

        push_line(&mut out, &format!("SUMMARY:{}", escape_text(ev.title())));
        push_line(&mut out, &format!("LOCATION:{}", escape_text(ev.location())));
        push_line(&mut out, "END:VEVENT");
    }

    push_line(&mut out, "END:VCALENDAR");
    out
}
