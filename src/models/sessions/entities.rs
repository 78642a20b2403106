use serde::{Deserialize, Serialize};

// 直播课
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveSession {
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_start: chrono::DateTime<chrono::Utc>,
    pub scheduled_end: chrono::DateTime<chrono::Utc>,
    pub meeting_url: Option<String>,
    pub meeting_id: Option<String>,
    pub is_recorded: bool,
    pub recording_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
