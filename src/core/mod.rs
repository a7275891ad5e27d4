pub mod classify;
pub mod context;
pub mod logic;
pub mod rules;
pub mod synth;

pub use context::CourseContext;
pub use logic::{Core, RowOutcome, Schedule, SkippedRow};
pub use rules::ScheduleRules;
