use crate::models::AcademicTerm;
use crate::utils::days::DayCodeTable;
use std::collections::{BTreeMap, BTreeSet};

/// Everything the classifier and synthesizer need besides the rows.
#[derive(Debug, Clone)]
pub struct ScheduleRules {
    pub term: AcademicTerm,
    pub days: DayCodeTable,
    /// Type codes that meet weekly (upper-case).
    pub meeting_types: BTreeSet<String>,
    /// Exam type code (upper-case) → title label.
    pub exam_labels: BTreeMap<String, String>,
}

impl ScheduleRules {
    pub fn is_meeting(&self, type_code: &str) -> bool {
        self.meeting_types.contains(&type_code.trim().to_uppercase())
    }

    pub fn exam_label(&self, type_code: &str) -> Option<&str> {
        self.exam_labels
            .get(&type_code.trim().to_uppercase())
            .map(String::as_str)
    }
}

impl Default for ScheduleRules {
    fn default() -> Self {
        crate::config::Config::default().rules()
    }
}
