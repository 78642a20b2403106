use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode, assignments::requests::CreateAssignmentRequest};
use crate::policy::Action;
use crate::services::{authorize_class_content, current_actor};

pub async fn create_assignment(
    service: &AssignmentService,
    class_id: i64,
    assignment_data: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let class = match authorize_class_content(&storage, &actor, class_id, Action::Create).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    if assignment_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Assignment title must not be empty",
        )));
    }

    if assignment_data.max_points <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "max_points must be positive",
        )));
    }

    // 作业作者记为班级负责人，管理员代创建也归属任课教师
    match storage
        .create_assignment(class_id, class.teacher_id, assignment_data)
        .await
    {
        Ok(assignment) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "作业创建成功")))
        }
        Err(e) => {
            error!("Assignment creation failed: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Assignment creation failed",
            )))
        }
    }
}
