pub mod common;

pub mod assignments;
pub mod auth;
pub mod calendar;
pub mod classes;
pub mod enrollments;
pub mod materials;
pub mod notes;
pub mod sessions;
pub mod submissions;
pub mod users;

pub use common::{ApiResponse, ErrorCode, PaginatedResponse, PaginationInfo, PaginationQuery};

// 程序启动时间，用于运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
