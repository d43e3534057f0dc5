pub mod add;
pub mod backup;
pub mod brk;
pub mod clock;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod projects;
pub mod status;
pub mod timer;
