pub mod attendance;
pub mod entry;
pub mod project;
pub mod timer_session;
