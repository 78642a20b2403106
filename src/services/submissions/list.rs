use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode, users::entities::UserRole};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

pub async fn list_submissions(
    service: &SubmissionService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            error!("Failed to load assignment {assignment_id}: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load assignment",
                )),
            );
        }
    };

    // 学生只回自己的那份，教师/管理员走全量口径
    if actor.role == UserRole::Student {
        match storage
            .get_submission_by_assignment_and_student(assignment_id, actor.id)
            .await
        {
            Ok(own) => {
                let submissions: Vec<_> = own.into_iter().collect();
                return Ok(HttpResponse::Ok().json(ApiResponse::success(submissions, "查询成功")));
            }
            Err(e) => {
                error!("Failed to load submissions: {e}");
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to load submissions",
                    )),
                );
            }
        }
    }

    let decision = policy::authorize(
        &actor,
        &Resource::Submission {
            student_id: 0,
            teacher_id: assignment.teacher_id,
            enrolled: false,
        },
        Action::Read,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    match storage.list_assignment_submissions(assignment_id).await {
        Ok(submissions) => Ok(HttpResponse::Ok().json(ApiResponse::success(submissions, "查询成功"))),
        Err(e) => {
            error!("Failed to load submissions: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to load submissions",
            )))
        }
    }
}
