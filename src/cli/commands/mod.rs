pub mod classify;
pub mod config;
pub mod init;
pub mod process;
pub mod windows;
