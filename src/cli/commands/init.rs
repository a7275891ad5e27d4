use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });

    let path = match &cli.config {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    };

    if path.exists() && !force {
        return Err(AppError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    info("Initializing webreg2ics…");
    Config::default().save(&path)?;

    success(format!("Config file: {}", path.display()));
    Ok(())
}
