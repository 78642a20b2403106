use serde::{Deserialize, Serialize};

// 课程资料，file_url 指向对象存储
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_type: String,
    pub file_size: Option<i64>,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

// 存储层的资料创建记录（上传完成后由服务层组装）
#[derive(Debug, Clone)]
pub struct NewMaterial {
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_type: String,
    pub file_size: Option<i64>,
}
