mod common;
use common::{at, date, row, rules};
use webreg2ics::core::Core;
use webreg2ics::export::ics::{IcsOptions, escape_text, fold_line, render_ics};

fn sample_events() -> Vec<webreg2ics::models::CalendarEvent> {
    Core::build_from_rows(
        [
            row("CSE 100", "LE", "MWF", "10:00a-10:50a", "PETER", "108"),
            row("", "DI", "M", "5:00p-5:50p", "CENTR", "115"),
            row("", "FI", "FINAL 03/13/2026", "11:30a-2:30p", "WLH", "2001"),
        ],
        &rules(),
    )
    .events
}

fn stamp() -> chrono::NaiveDateTime {
    at(date(2026, 1, 2), 8, 0)
}

#[test]
fn test_calendar_envelope() {
    let ics = render_ics(&sample_events(), stamp(), &IcsOptions::default());

    assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
    assert!(ics.contains("CALSCALE:GREGORIAN\r\n"));
    assert!(ics.contains("PRODID:-//webreg2ics//EN\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 5);
    assert_eq!(ics.matches("END:VEVENT").count(), 5);
}

#[test]
fn test_empty_calendar() {
    let ics = render_ics(&[], stamp(), &IcsOptions::default());
    assert!(ics.starts_with("BEGIN:VCALENDAR"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert!(!ics.contains("VEVENT"));
}

#[test]
fn test_recurring_event_lines() {
    let ics = render_ics(&sample_events(), stamp(), &IcsOptions::default());

    assert!(ics.contains("UID:CSE-100-LE-0@webreg\r\n"));
    assert!(ics.contains("DTSTAMP:20260102T080000\r\n"));
    assert!(ics.contains("DTSTART:20260105T100000\r\nDTEND:20260105T105000\r\n"));
    assert!(ics.contains("DTSTART:20260107T100000\r\n"));
    assert!(ics.contains("DTSTART:20260109T100000\r\n"));
    assert!(ics.contains("RRULE:FREQ=WEEKLY;UNTIL=20260313T235959\r\n"));
    assert!(ics.contains("SUMMARY:CSE 100 LE\r\n"));
    assert!(ics.contains("LOCATION:PETER 108\r\n"));

    // Monday lecture and Monday discussion both skip the two Monday holidays,
    // each at its own start time
    assert!(ics.contains("EXDATE:20260119T100000,20260216T100000\r\n"));
    assert!(ics.contains("EXDATE:20260119T170000,20260216T170000\r\n"));
    // Wednesday/Friday series carry no EXDATE
    assert_eq!(ics.matches("EXDATE").count(), 2);
}

#[test]
fn test_exam_event_lines() {
    let ics = render_ics(&sample_events(), stamp(), &IcsOptions::default());

    assert!(ics.contains("UID:CSE-100-FI-2026-03-13@webreg\r\n"));
    assert!(ics.contains("DTSTART:20260313T113000\r\nDTEND:20260313T143000\r\n"));
    assert!(ics.contains("SUMMARY:CSE 100 Final\r\nLOCATION:WLH 2001\r\n"));
    assert_eq!(ics.matches("RRULE").count(), 4);
}

#[test]
fn test_uids_are_unique() {
    // two discussion sections of the same course on the same weekday
    let events = Core::build_from_rows(
        [
            row("CSE 100", "DI", "M", "5:00p-5:50p", "CENTR", "115"),
            row("", "DI", "M", "6:00p-6:50p", "CENTR", "119"),
        ],
        &rules(),
    )
    .events;
    let opts = IcsOptions {
        uid_domain: "ucsd.example".into(),
        product: "test".into(),
    };
    let ics = render_ics(&events, stamp(), &opts);

    assert!(ics.contains("UID:CSE-100-DI-0@ucsd.example\r\n"));
    assert!(ics.contains("UID:CSE-100-DI-0-2@ucsd.example\r\n"));
}

#[test]
fn test_rendering_is_repeatable_except_dtstamp() {
    let events = sample_events();
    let first = render_ics(&events, stamp(), &IcsOptions::default());
    let again = render_ics(&events, stamp(), &IcsOptions::default());
    assert_eq!(first, again);

    let later = render_ics(&events, at(date(2026, 2, 1), 9, 30), &IcsOptions::default());
    let strip = |s: &str| -> Vec<String> {
        s.lines()
            .filter(|l| !l.starts_with("DTSTAMP:"))
            .map(str::to_string)
            .collect()
    };
    assert_ne!(first, later);
    assert_eq!(strip(&first), strip(&later));
}

#[test]
fn test_text_escaping() {
    assert_eq!(escape_text("Smith, Jane; TA"), "Smith\\, Jane\\; TA");
    assert_eq!(escape_text("a\\b\nc"), "a\\\\b\\nc");

    let events = Core::build_from_rows(
        [row("CSE 100", "LE", "M", "10:00a-10:50a", "PETER,", "108")],
        &rules(),
    )
    .events;
    let ics = render_ics(&events, stamp(), &IcsOptions::default());
    assert!(ics.contains("LOCATION:PETER\\, 108\r\n"));
}

#[test]
fn test_long_lines_are_folded() {
    let short = "SUMMARY:CSE 100 LE";
    assert_eq!(fold_line(short), short);

    let long = format!("SUMMARY:{}", "x".repeat(150));
    let folded = fold_line(&long);
    let parts: Vec<&str> = folded.split("\r\n").collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].len(), 75);
    assert!(parts[1].starts_with(' '));
    assert!(parts.iter().all(|p| p.len() <= 75));
    assert_eq!(folded.replace("\r\n ", ""), long);
}

#[test]
fn test_no_series_starts_after_term_end() {
    let mut r = rules();
    r.term = webreg2ics::models::AcademicTerm::new(date(2026, 1, 5), date(2026, 1, 6), []);

    let events = Core::build_from_rows(
        [row("CSE 100", "LE", "MWF", "10:00a-10:50a", "PETER", "108")],
        &r,
    )
    .events;
    let ics = render_ics(&events, stamp(), &IcsOptions::default());

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    assert!(ics.contains("DTSTART:20260105T100000\r\n"));
    assert!(ics.contains("RRULE:FREQ=WEEKLY;UNTIL=20260106T235959\r\n"));
    assert!(!ics.contains("DTSTART:20260107"));
    assert!(!ics.contains("DTSTART:20260109"));
}
