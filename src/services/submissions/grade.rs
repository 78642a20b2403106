use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode, submissions::requests::GradeSubmissionRequest};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

// 分数闭区间校验：0 <= grade <= max_points
fn validate_grade(grade: i32, max_points: i32) -> bool {
    (0..=max_points).contains(&grade)
}

pub async fn grade_submission(
    service: &SubmissionService,
    submission_id: i64,
    grade_data: GradeSubmissionRequest,
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
        Action::Grade,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    if !validate_grade(grade_data.grade, assignment.max_points) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::GradeOutOfRange,
            format!(
                "Grade must be between 0 and {} inclusive",
                assignment.max_points
            ),
        )));
    }

    // 重复批改覆盖之前的分数与评语
    match storage.grade_submission(submission_id, grade_data).await {
        Ok(Some(submission)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "批改成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => {
            error!("Failed to grade submission {submission_id}: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to grade submission",
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate_grade;

    #[test]
    fn grade_bounds_are_inclusive() {
        assert!(validate_grade(0, 100));
        assert!(validate_grade(100, 100));
        assert!(validate_grade(60, 100));
    }

    #[test]
    fn grade_outside_bounds_rejected() {
        assert!(!validate_grade(-1, 100));
        assert!(!validate_grade(101, 100));
        assert!(!validate_grade(1, 0));
    }
}
