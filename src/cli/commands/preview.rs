use crate::cli::commands::{load_schedule, report_skipped};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::render_preview;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview { source, term, mode } = cmd {
        let (_, schedule) = load_schedule(source, term, cfg)?;
        report_skipped(&schedule);

        let events = render_preview(&schedule.events, *mode);
        println!("{}", serde_json::to_string_pretty(&events)?);
    }
    Ok(())
}
