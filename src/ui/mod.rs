pub mod confirm;
pub mod messages;
