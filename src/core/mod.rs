pub mod add;
pub mod attendance;
pub mod backup;
pub mod clock;
pub mod del;
pub mod entries;
pub mod export;
pub mod log;
pub mod logic;
pub mod metrics;
pub mod task;
pub mod timer;
pub mod workday;
