use crate::core::session::REMINDER;
use crate::ui::messages::info;

pub fn handle() {
    info(REMINDER);
}
