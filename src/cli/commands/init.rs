use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::io;
use tracing::info;

/// Handle the `init` command
///
/// Writes `~/.bikeshare/bikeshare.conf` with the default settings. An
/// existing file is kept unless `--force` is given.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let path = Config::config_file();

        if path.exists() && !*force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        Config::default().save_to(&path)?;
        info!(path = %path.display(), "Configuration written");
        success(
            &mut io::stdout(),
            format!("Config file: {}", path.display()),
        )?;
    }
    Ok(())
}
