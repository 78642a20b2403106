use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{
    ApiResponse, ErrorCode, enrollments::requests::EnrollStudentRequest,
    users::entities::UserRole,
};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

// POST /classes/{id}/enroll：教师/管理员录入选课，学生不可自行选课
pub async fn enroll_student(
    service: &ClassService,
    class_id: i64,
    enroll_data: EnrollStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    // 班级必须存在且在用，已停用班级不再接收选课
    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) if class.is_active => class,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to load class {class_id}: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load class",
                )),
            );
        }
    };

    // 角色门禁：学生不能管理选课
    let decision = policy::authorize(&actor, &Resource::Enrollment, Action::Create);
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    // 归属门禁：非本班教师不能往别人班里加学生
    let decision = policy::authorize(
        &actor,
        &Resource::ClassContent {
            teacher_id: class.teacher_id,
            enrolled: false,
        },
        Action::Update,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    // 目标必须是活跃的学生账号
    match storage.get_user_by_id(enroll_data.student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student && user.is_active => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to load student {}: {e}", enroll_data.student_id);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load student",
                )),
            );
        }
    }

    match storage.enroll_student(enroll_data.student_id, class_id).await {
        Ok(enrollment) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(enrollment, "选课成功")))
        }
        // 重复选课由 (student_id, class_id) 唯一索引拦截
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::AlreadyEnrolled, "Student is already enrolled"),
        )),
        Err(e) => {
            error!("Enrollment failed: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentFailed,
                "Enrollment failed",
            )))
        }
    }
}
