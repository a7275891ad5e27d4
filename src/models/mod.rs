pub mod course_type;
pub mod event;
pub mod row;
pub mod term;

pub use course_type::CourseType;
pub use event::{CalendarEvent, OneOffEvent, RecurringEvent};
pub use row::{CourseMeta, ScheduleRow, SourceRecord};
pub use term::AcademicTerm;
