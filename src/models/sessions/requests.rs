use serde::Deserialize;

// 创建直播课请求
#[derive(Debug, Deserialize)]
pub struct CreateLiveSessionRequest {
    pub title: String,
    pub description: Option<String>,
    pub scheduled_start: chrono::DateTime<chrono::Utc>,
    pub scheduled_end: chrono::DateTime<chrono::Utc>,
    pub meeting_url: Option<String>,
    pub meeting_id: Option<String>,
}

// 更新直播课请求
#[derive(Debug, Deserialize)]
pub struct UpdateLiveSessionRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub scheduled_start: Option<chrono::DateTime<chrono::Utc>>,
    pub scheduled_end: Option<chrono::DateTime<chrono::Utc>>,
    pub meeting_url: Option<String>,
    pub meeting_id: Option<String>,
    pub is_recorded: Option<bool>,
    pub recording_url: Option<String>,
}
