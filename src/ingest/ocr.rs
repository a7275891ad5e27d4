//! Schedule rows recovered from OCR text of the rendered schedule page.
//!
//! Text goes through independent stages: line normalization, grammar
//! matching, then per-field cleanup of common recognition mistakes.

use crate::models::{CourseMeta, ScheduleRow, SourceRecord};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Full course line: the first row printed for a course.
static COURSE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^(?P<subject>[A-Z]{2,4})\s+
        (?P<number>\d+[A-Z]{0,2})\s+
        (?P<title>.+?)\s+
        (?P<section>[A-Z][0-9O]{2,5})\s+
        (?P<type>[A-Z]{2})\s+
        (?P<instructor>.+?)\s+
        (?P<grading>L|P/NP|S/U|P)\s+
        (?P<units>\d+\.\d+)\s+
        (?P<days>[A-Za-z]+)\s+
        (?P<time>\S+)\s+
        (?P<building>[A-Z0-9]+)\s+
        (?P<room>[A-Z0-9]+)",
    )
    .expect("course line pattern")
});

/// Continuation line: discussions, labs and exams under the current course.
static CONTINUATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^(?:(?P<section>[A-Z][0-9O]{2,5})\s+)?
        (?P<type>[A-Z]{2})\s+
        (?P<days>[A-Za-z]+)\s+
        (?:(?P<date>\d{1,2}/\d{1,2}/\d{4})\s+)?
        (?P<time>\d{1,2}:\d{2}[apAP]\s*-\s*\d{1,2}:\d{2}[apAP]|TBA)\s+
        (?P<building>[A-Z0-9]+)\s+
        (?P<room>[A-Z0-9]+)",
    )
    .expect("continuation line pattern")
});

/// Any line starting like "CSE 100".
static COURSE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<subject>[A-Z]{2,4})\s+(?P<number>\d+[A-Z]{0,2})\b").expect("header pattern")
});

static ROMAN_TWO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bIl\b").expect("roman numeral pattern"));

/// Trim lines, collapse whitespace runs and drop blank lines.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

/// OCR reads Friday's "F" as "E".
pub fn clean_days(days: &str) -> String {
    days.replace('E', "F")
}

/// "AO1" → "A01", "A5" → "A05", "A0123" → "A01".
pub fn clean_section(section: &str) -> String {
    let mut chars = section.trim().chars();
    let Some(lead) = chars.next() else {
        return String::new();
    };

    let digits: String = chars
        .filter(|c| c.is_ascii_digit() || *c == 'O')
        .map(|c| if c == 'O' { '0' } else { c })
        .take(2)
        .collect();

    format!("{lead}{digits:0>2}")
}

/// Roman numeral two read as "Il".
pub fn clean_title(title: &str) -> String {
    ROMAN_TWO.replace_all(title, "II").replace("Il", "II")
}

fn field<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map(|m| m.as_str()).unwrap_or("")
}

fn course_row(caps: &Captures<'_>) -> ScheduleRow {
    let course = format!("{} {}", field(caps, "subject"), field(caps, "number"));
    let mut row = ScheduleRow::new(
        &course,
        field(caps, "type"),
        &clean_days(field(caps, "days")),
        field(caps, "time"),
        field(caps, "building"),
        field(caps, "room"),
    );
    row.meta = Some(CourseMeta {
        title: clean_title(field(caps, "title")),
        section: clean_section(field(caps, "section")),
        instructor: field(caps, "instructor").to_string(),
        grading: field(caps, "grading").to_string(),
        units: field(caps, "units").to_string(),
    });
    row
}

fn continuation_row(caps: &Captures<'_>) -> ScheduleRow {
    let mut days = clean_days(field(caps, "days"));
    let date = field(caps, "date");
    if !date.is_empty() {
        days = format!("{days} {date}");
    }

    let time: String = field(caps, "time").split_whitespace().collect();

    let mut row = ScheduleRow::new(
        "",
        field(caps, "type"),
        &days,
        &time,
        field(caps, "building"),
        field(caps, "room"),
    );
    let section = field(caps, "section");
    if !section.is_empty() {
        row.meta = Some(CourseMeta {
            section: clean_section(section),
            ..CourseMeta::default()
        });
    }
    row
}

/// Match a single normalized line against the grammar.
pub fn match_line(line: &str) -> Option<SourceRecord> {
    if let Some(caps) = COURSE_LINE.captures(line) {
        return Some(SourceRecord::Row(course_row(&caps)));
    }
    if let Some(caps) = CONTINUATION_LINE.captures(line) {
        return Some(SourceRecord::Row(continuation_row(&caps)));
    }
    COURSE_HEADER.captures(line).map(|caps| {
        SourceRecord::Header(format!(
            "{} {}",
            field(&caps, "subject"),
            field(&caps, "number")
        ))
    })
}

/// All records found in a block of OCR text, in reading order.
pub fn parse_records(text: &str) -> Vec<SourceRecord> {
    normalize_lines(text)
        .iter()
        .filter_map(|line| match_line(line))
        .collect()
}
