use serde::{Deserialize, Serialize};

// 日历事件
//
// reference_id 是由 event_type 标注语义的松散指针（作业/直播课等），
// 不设外键，指向的实体缺失时事件仍然有效。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub event_type: String,
    pub reference_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
