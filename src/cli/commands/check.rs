use crate::cli::parser::Commands;
use crate::core::validator::EntryValidator;
use crate::errors::AppResult;
use crate::ui::entries::status_preview;
use crate::ui::messages::success;
use crate::utils::date;

/// Validate one entry and print the result. Nothing is stored.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Check {
        name,
        activity,
        metime,
        minutes,
    } = cmd
    {
        let entry = EntryValidator::validate_raw(name, activity, metime, minutes, date::today())?;

        success(format!(
            "Valid entry: {} | {} | {} | {} min | {}",
            entry.name(),
            entry.wellness_activity(),
            entry.me_time_activity(),
            entry.screen_free_minutes(),
            entry.date_str()
        ));
        println!("{}", status_preview(entry.status()));
    }
    Ok(())
}
