pub mod entry;
pub mod status;

pub use entry::{Entry, EntryInput};
pub use status::Status;
