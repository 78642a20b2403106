use serde::Deserialize;

fn default_max_points() -> i32 {
    100
}

// 创建作业请求
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub due_date: chrono::DateTime<chrono::Utc>,
    #[serde(default = "default_max_points")]
    pub max_points: i32,
}

// 更新作业请求
#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub max_points: Option<i32>,
}
