pub mod history;
pub mod session;
pub mod store;
pub mod validator;

pub use session::Session;
pub use store::RecordStore;
pub use validator::EntryValidator;
