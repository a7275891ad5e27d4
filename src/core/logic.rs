use crate::core::classify::{RowClass, classify};
use crate::core::context::CourseContext;
use crate::core::rules::ScheduleRules;
use crate::core::synth;
use crate::errors::RowError;
use crate::models::{CalendarEvent, ScheduleRow, SourceRecord};

/// Result of interpreting one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Events(Vec<CalendarEvent>),
    Ignored,
    Skipped(RowError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Zero-based position of the record in the input sequence.
    pub index: usize,
    pub row: ScheduleRow,
    pub reason: RowError,
}

/// Everything one document produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub events: Vec<CalendarEvent>,
    pub skipped: Vec<SkippedRow>,
    pub ignored: usize,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

pub struct Core;

impl Core {
    /// Interpret one row against the running course context.
    pub fn process_row(
        ctx: &mut CourseContext,
        row: &ScheduleRow,
        rules: &ScheduleRules,
    ) -> RowOutcome {
        ctx.observe(&row.subject_course);

        let class = classify(row, rules);
        if class == RowClass::Ignored {
            return RowOutcome::Ignored;
        }

        let Some(course) = ctx.current() else {
            return RowOutcome::Skipped(RowError::NoCurrentCourse);
        };

        let result = match class {
            RowClass::WeeklyMeeting => synth::weekly_meetings(course, row, rules),
            RowClass::Exam(label) => synth::exam(course, &label, row).map(|e| vec![e]),
            RowClass::Ignored => Ok(Vec::new()),
        };

        match result {
            Ok(events) => RowOutcome::Events(events),
            Err(reason) => RowOutcome::Skipped(reason),
        }
    }

    /// Walk a whole document. The course context lives only for this call.
    pub fn build_schedule<I>(records: I, rules: &ScheduleRules) -> Schedule
    where
        I: IntoIterator<Item = SourceRecord>,
    {
        let (_, schedule) = records.into_iter().enumerate().fold(
            (CourseContext::new(), Schedule::default()),
            |(mut ctx, mut schedule), (index, record)| {
                match record {
                    SourceRecord::Header(course) => ctx.observe(&course),
                    SourceRecord::Row(row) => match Self::process_row(&mut ctx, &row, rules) {
                        RowOutcome::Events(events) => schedule.events.extend(events),
                        RowOutcome::Ignored => schedule.ignored += 1,
                        RowOutcome::Skipped(reason) => {
                            log::debug!("skipping row {index}: {reason}");
                            schedule.skipped.push(SkippedRow { index, row, reason });
                        }
                    },
                }
                (ctx, schedule)
            },
        );

        schedule
    }

    /// Convenience for tabular sources, which never carry header records.
    pub fn build_from_rows<I>(rows: I, rules: &ScheduleRules) -> Schedule
    where
        I: IntoIterator<Item = ScheduleRow>,
    {
        Self::build_schedule(rows.into_iter().map(SourceRecord::Row), rules)
    }
}
