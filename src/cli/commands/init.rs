use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Writes the default configuration file (or the `--config` target).
/// An existing file is left alone unless `--force` is given.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = Config::resolve_path(cli.config.as_deref());

        if path.exists() && !force {
            warning(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        info("Initializing wellness-logger…");
        Config::default().save(&path)?;
        success(format!("Config file: {}", path.display()));
    }

    Ok(())
}
