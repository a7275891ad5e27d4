use crate::cli::commands::{load_schedule, report_skipped};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTargets};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        source,
        term,
        out,
        json,
        bundle,
        mode,
        force,
    } = cmd
    {
        let (cfg, schedule) = load_schedule(source, term, cfg)?;

        info(format!(
            "{} event(s) from {} ({} row(s) ignored)",
            schedule.events.len(),
            source.input,
            schedule.ignored
        ));
        report_skipped(&schedule);

        let targets = ExportTargets {
            ics: expand_tilde(out),
            preview: json.as_deref().map(expand_tilde),
            bundle: bundle.as_deref().map(expand_tilde),
            mode: *mode,
            force: *force,
        };

        ExportLogic::export(&schedule, &cfg, &targets, Local::now().naive_local())?;
    }
    Ok(())
}
