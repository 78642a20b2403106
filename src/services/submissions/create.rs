use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode, submissions::requests::CreateSubmissionRequest};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

pub async fn create_submission(
    service: &SubmissionService,
    assignment_id: i64,
    submission_data: CreateSubmissionRequest,
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

    let enrolled = match storage.get_enrollment(actor.id, assignment.class_id).await {
        Ok(enrollment) => enrollment.is_some(),
        Err(e) => {
            error!("Failed to load enrollment: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load enrollment",
                )),
            );
        }
    };

    let decision = policy::authorize(
        &actor,
        &Resource::Submission {
            student_id: actor.id,
            teacher_id: assignment.teacher_id,
            enrolled,
        },
        Action::Create,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    // 文本与文件引用至少要有一个非空
    let has_text = submission_data
        .text_content
        .as_deref()
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false);
    let has_file = submission_data
        .file_url
        .as_deref()
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false);
    if !has_text && !has_file {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Submission requires text content or a file reference",
        )));
    }

    // 每人每份作业只收一次提交，提交后不可撤回或覆盖
    match storage
        .get_submission_by_assignment_and_student(assignment_id, actor.id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadySubmitted,
                "Assignment already submitted",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check existing submission: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check existing submission",
                )),
            );
        }
    }

    match storage
        .create_submission(assignment_id, actor.id, submission_data)
        .await
    {
        Ok(submission) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(submission, "作业提交成功")))
        }
        Err(e) => {
            error!("Submission creation failed: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Submission creation failed",
            )))
        }
    }
}
