use serde::{Deserialize, Serialize};

use super::course_type::CourseType;

/// One line of the schedule table, as produced by an ingester.
///
/// All fields are raw strings: interpretation happens in `core`.
/// An empty `subject_course` means "same course as the previous row".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleRow {
    pub subject_course: String,
    #[serde(rename = "type")]
    pub type_code: String,
    pub days: String,
    pub time: String,
    pub building: String,
    pub room: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<CourseMeta>,
}

/// Extra columns recovered from OCR course lines. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseMeta {
    pub title: String,
    pub section: String,
    pub instructor: String,
    pub grading: String,
    pub units: String,
}

impl ScheduleRow {
    pub fn new(
        subject_course: &str,
        type_code: &str,
        days: &str,
        time: &str,
        building: &str,
        room: &str,
    ) -> Self {
        Self {
            subject_course: subject_course.trim().to_string(),
            type_code: type_code.trim().to_string(),
            days: days.trim().to_string(),
            time: time.trim().to_string(),
            building: building.trim().to_string(),
            room: room.trim().to_string(),
            meta: None,
        }
    }

    pub fn course_type(&self) -> CourseType {
        CourseType::from_code(&self.type_code)
    }

    /// `"{building} {room}"` with surrounding blanks removed.
    pub fn location(&self) -> String {
        format!("{} {}", self.building, self.room).trim().to_string()
    }
}

/// Unit consumed by the per-document fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRecord {
    /// A standalone course header line (e.g. "CSE 100") seen in OCR text.
    Header(String),
    Row(ScheduleRow),
}

impl From<ScheduleRow> for SourceRecord {
    fn from(row: ScheduleRow) -> Self {
        SourceRecord::Row(row)
    }
}
