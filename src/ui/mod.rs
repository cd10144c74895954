pub mod entries;
pub mod messages;
