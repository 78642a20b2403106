use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, users::entities::UserRole};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

pub async fn get_class(
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

    // 学生的读取范围由选课记录决定
    let enrolled = if actor.role == UserRole::Student {
        storage
            .get_enrollment(actor.id, class_id)
            .await
            .map_err(actix_web::error::ErrorInternalServerError)?
            .is_some()
    } else {
        false
    };

    let decision = policy::authorize(
        &actor,
        &Resource::Class {
            teacher_id: class.teacher_id,
            enrolled,
        },
        Action::Read,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(class, "查询成功")))
}
