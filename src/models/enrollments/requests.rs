use serde::Deserialize;

// 选课请求（POST /classes/{id}/enroll）
#[derive(Debug, Deserialize)]
pub struct EnrollStudentRequest {
    pub student_id: i64,
}
