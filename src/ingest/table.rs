//! CSV table as written by the PDF table extractor.

use crate::errors::{AppError, AppResult};
use crate::models::ScheduleRow;
use std::io::Read;

const SUBJECT: &str = "subject course";
const TYPE: &str = "type";
const DAYS: &str = "days";
const TIME: &str = "time";
const BUILDING: &str = "bldg";
const ROOM: &str = "room";

/// Extracted headers may contain line breaks ("Subject\nCourse").
pub fn normalize_header(h: &str) -> String {
    h.replace(['\r', '\n'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

struct Columns {
    subject: Option<usize>,
    kind: usize,
    days: usize,
    time: usize,
    building: Option<usize>,
    room: Option<usize>,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> AppResult<Self> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |name: &str| names.iter().position(|n| n == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AppError::Ingest(format!("missing column '{name}'")))
        };

        Ok(Self {
            subject: find(SUBJECT),
            kind: require(TYPE)?,
            days: require(DAYS)?,
            time: require(TIME)?,
            building: find(BUILDING),
            room: find(ROOM),
        })
    }
}

fn cell(record: &csv::StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| record.get(i)).unwrap_or("").trim()
}

/// Read every data row. Short records are padded with empty cells.
pub fn read_rows<R: Read>(reader: R) -> AppResult<Vec<ScheduleRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let cols = Columns::locate(rdr.headers()?)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(ScheduleRow::new(
            cell(&record, cols.subject),
            cell(&record, Some(cols.kind)),
            cell(&record, Some(cols.days)),
            cell(&record, Some(cols.time)),
            cell(&record, cols.building),
            cell(&record, cols.room),
        ));
    }

    Ok(rows)
}
