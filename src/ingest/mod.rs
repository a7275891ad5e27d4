//! Producers of schedule records. Each reader turns one input document into
//! the `SourceRecord` sequence consumed by `core`.

pub mod ocr;
pub mod table;

use crate::errors::{AppError, AppResult};
use crate::models::{ScheduleRow, SourceRecord};
use crate::utils::path::extension_of;
use clap::ValueEnum;
use std::fs::{self, File};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Table extracted from the PDF, one row per record
    Csv,
    /// Plain text recognized from the rendered page
    Text,
    /// JSON array of row objects
    Json,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Text => "text",
            InputFormat::Json => "json",
        }
    }

    /// `.csv` and `.json` by extension; anything else is OCR text.
    pub fn infer(path: &Path) -> Self {
        match extension_of(path).as_deref() {
            Some("csv") => InputFormat::Csv,
            Some("json") => InputFormat::Json,
            _ => InputFormat::Text,
        }
    }
}

/// Rows from a JSON array such as `[{"subjectCourse": "CSE 100", "type": "LE", ...}]`.
pub fn read_json_rows(content: &str) -> AppResult<Vec<ScheduleRow>> {
    let rows: Vec<ScheduleRow> = serde_json::from_str(content)?;
    Ok(rows
        .into_iter()
        .map(|r| {
            let mut row = ScheduleRow::new(
                &r.subject_course,
                &r.type_code,
                &r.days,
                &r.time,
                &r.building,
                &r.room,
            );
            row.meta = r.meta;
            row
        })
        .collect())
}

/// Read `path` in the given (or inferred) format.
pub fn read_records(path: &Path, format: Option<InputFormat>) -> AppResult<Vec<SourceRecord>> {
    if !path.exists() {
        return Err(AppError::Ingest(format!(
            "input file not found: {}",
            path.display()
        )));
    }

    let format = format.unwrap_or_else(|| InputFormat::infer(path));
    log::debug!("reading {} as {}", path.display(), format.as_str());

    let records = match format {
        InputFormat::Csv => table::read_rows(File::open(path)?)?
            .into_iter()
            .map(SourceRecord::Row)
            .collect(),
        InputFormat::Json => read_json_rows(&fs::read_to_string(path)?)?
            .into_iter()
            .map(SourceRecord::Row)
            .collect(),
        InputFormat::Text => ocr::parse_records(&fs::read_to_string(path)?),
    };

    Ok(records)
}
