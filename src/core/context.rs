/// Remembers the most recent course seen while walking one document.
///
/// WebReg prints the course only on its first row; discussion, lab and exam
/// rows that follow leave the column blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseContext {
    current: Option<String>,
}

impl CourseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the subject column of a row. Blank values and the "nan"
    /// missing-value marker keep the previous course.
    pub fn observe(&mut self, subject: &str) {
        let subject = subject.trim();
        if !subject.is_empty() && !subject.eq_ignore_ascii_case("nan") {
            self.current = Some(subject.to_string());
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
