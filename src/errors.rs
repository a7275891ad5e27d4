//! Unified application error type.
//! Document-level failures are `AppError`; failures that only concern a
//! single schedule row are `RowError` and never abort a conversion.

use std::io;
use thiserror::Error;

/// Reasons a single schedule row contributes no events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("invalid time format: '{0}'")]
    InvalidTimeFormat(String),

    #[error("invalid date format: '{0}'")]
    InvalidDateFormat(String),

    #[error("no current course established")]
    NoCurrentCourse,

    #[error("malformed row: {0}")]
    MalformedRow(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Ingest error: {0}")]
    Ingest(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No schedule rows found in {0}")]
    NoScheduleRows(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
