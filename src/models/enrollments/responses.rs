use serde::Serialize;

// 班级花名册条目：学生信息 + 选课时间
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
