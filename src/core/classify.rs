use crate::core::rules::ScheduleRules;
use crate::models::ScheduleRow;

/// What a row turns into, decided from its type code and days column only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClass {
    /// Lecture, discussion, lab: repeats every week of the term.
    WeeklyMeeting,
    /// Midterm or final: one dated occurrence. Carries the title label.
    Exam(String),
    /// Header rows, blank rows, unknown type codes, rows with no time.
    Ignored,
}

pub fn classify(row: &ScheduleRow, rules: &ScheduleRules) -> RowClass {
    if row.time.trim().is_empty() {
        return RowClass::Ignored;
    }

    let days = row.days.trim();

    if rules.is_meeting(&row.type_code) && !days.is_empty() {
        return RowClass::WeeklyMeeting;
    }

    // Exam rows print "<weekday> MM/DD/YYYY" in the days column.
    if let Some(label) = rules.exam_label(&row.type_code)
        && days.contains(' ')
    {
        return RowClass::Exam(label.to_string());
    }

    RowClass::Ignored
}
