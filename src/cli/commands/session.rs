use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;

use std::fs::File;
use std::io::{self, BufReader};

/// Run a session over stdin, or over `--script FILE`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { script } = cmd {
        let mut session = Session::new(cfg.clone());

        match script {
            Some(path) => {
                let mut reader = BufReader::new(File::open(path)?);
                session.run(&mut reader)?;
            }
            None => {
                let mut reader = io::stdin().lock();
                session.run(&mut reader)?;
            }
        }
    }

    Ok(())
}
