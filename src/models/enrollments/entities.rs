use serde::{Deserialize, Serialize};

// 选课记录，(student_id, class_id) 唯一
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
