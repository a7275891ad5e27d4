pub mod config;
pub mod convert;
pub mod init;
pub mod list;
pub mod preview;
pub mod rows;

use crate::cli::parser::{SourceArgs, TermArgs};
use crate::config::Config;
use crate::core::{Core, Schedule};
use crate::errors::{AppError, AppResult};
use crate::ingest::read_records;
use crate::ui::messages::{detail, warning};
use crate::utils::path::expand_tilde;

/// Read the input and run it through the core with the effective config.
pub(crate) fn load_schedule(
    source: &SourceArgs,
    term: &TermArgs,
    cfg: &Config,
) -> AppResult<(Config, Schedule)> {
    let cfg = cfg
        .clone()
        .with_term_overrides(term.term_start, term.term_end, &term.holidays)?;

    let path = expand_tilde(&source.input);
    let records = read_records(&path, source.from)?;
    let schedule = Core::build_schedule(records, &cfg.rules());

    if schedule.is_empty() {
        return Err(AppError::NoScheduleRows(path.display().to_string()));
    }

    Ok((cfg, schedule))
}

/// Surface skipped rows without failing the command.
pub(crate) fn report_skipped(schedule: &Schedule) {
    if schedule.skipped.is_empty() {
        return;
    }

    warning(format!("{} row(s) skipped:", schedule.skipped.len()));
    for s in &schedule.skipped {
        detail(format!("#{} {} {}: {}", s.index + 1, s.row.type_code, s.row.days, s.reason));
    }
}
