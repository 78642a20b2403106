use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

// GET /classes/{id}/students：班级花名册，任课教师与管理员可见
pub async fn class_roster(
    service: &ClassService,
    class_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
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

    let decision = policy::authorize(
        &actor,
        &Resource::Roster {
            teacher_id: class.teacher_id,
        },
        Action::Read,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    match storage.list_class_roster(class_id).await {
        Ok(roster) => Ok(HttpResponse::Ok().json(ApiResponse::success(roster, "查询成功"))),
        Err(e) => {
            error!("Failed to load roster for class {class_id}: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to load roster",
            )))
        }
    }
}
