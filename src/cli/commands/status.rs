use crate::cli::parser::Commands;
use crate::core::validator::{EntryValidator, check_minutes};
use crate::errors::{AppError, AppResult};
use crate::ui::entries::status_preview;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Status { minutes } = cmd {
        let m = check_minutes(*minutes).map_err(|e| AppError::Validation(e.into()))?;
        println!("{}", status_preview(EntryValidator::derive_status(m)));
    }
    Ok(())
}
