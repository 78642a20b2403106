use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

pub async fn get_submission(
    service: &SubmissionService,
    submission_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
        Err(e) => {
            error!("Failed to load submission {submission_id}: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load submission",
                )),
            );
        }
    };

    // 作业作者是鉴权事实的一部分，须回表取
    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            error!("Failed to load assignment: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load assignment",
                )),
            );
        }
    };

    let decision = policy::authorize(
        &actor,
        &Resource::Submission {
            student_id: submission.student_id,
            teacher_id: assignment.teacher_id,
            enrolled: false,
        },
        Action::Read,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "查询成功")))
}
