use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The single in-progress task timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSession {
    pub project_id: String,
    pub task_name: String,
    pub is_billable: bool,
    pub started_at: NaiveDateTime,
}
