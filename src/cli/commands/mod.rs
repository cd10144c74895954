pub mod check;
pub mod config;
pub mod init;
pub mod remind;
pub mod session;
pub mod status;
