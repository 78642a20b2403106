use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub class_id: i64,
    // 布置作业的教师
    pub teacher_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub max_points: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
