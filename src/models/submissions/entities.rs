use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub file_url: Option<String>,
    pub text_content: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 已批改时为 Some，0 <= grade <= assignment.max_points
    pub grade: Option<i32>,
    pub feedback: Option<String>,
}
