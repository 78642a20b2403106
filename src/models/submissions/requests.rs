use serde::Deserialize;

// 提交作业请求，文本与文件引用至少其一
#[derive(Debug, Deserialize)]
pub struct CreateSubmissionRequest {
    pub text_content: Option<String>,
    pub file_url: Option<String>,
}

// 批改请求
#[derive(Debug, Deserialize)]
pub struct GradeSubmissionRequest {
    pub grade: i32,
    pub feedback: Option<String>,
}
