//! wellness-logger main entrypoint.

use wellness_logger::{report_error, run};

fn main() {
    if let Err(e) = run() {
        report_error(&e);
        std::process::exit(1);
    }
}
