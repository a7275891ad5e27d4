use serde::Serialize;

/// Section type codes as printed in the "Type" column of a WebReg schedule.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum CourseType {
    Lecture,    // LE
    Discussion, // DI
    Lab,        // LA
    Seminar,    // SE
    Midterm,    // MI
    Final,      // FI
    Other(String),
}

impl CourseType {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "LE" => Self::Lecture,
            "DI" => Self::Discussion,
            "LA" => Self::Lab,
            "SE" => Self::Seminar,
            "MI" => Self::Midterm,
            "FI" => Self::Final,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            CourseType::Lecture => "LE",
            CourseType::Discussion => "DI",
            CourseType::Lab => "LA",
            CourseType::Seminar => "SE",
            CourseType::Midterm => "MI",
            CourseType::Final => "FI",
            CourseType::Other(code) => code,
        }
    }

    /// Human-readable name, used in terminal listings.
    pub fn describe(&self) -> &str {
        match self {
            CourseType::Lecture => "Lecture",
            CourseType::Discussion => "Discussion",
            CourseType::Lab => "Lab",
            CourseType::Seminar => "Seminar",
            CourseType::Midterm => "Midterm",
            CourseType::Final => "Final",
            CourseType::Other(code) => code,
        }
    }
}
