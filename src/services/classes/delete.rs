use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

// DELETE /classes/{id}：软删除。选课与历史提交保留，列表不再展示
pub async fn delete_class(
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
        &Resource::Class {
            teacher_id: class.teacher_id,
            enrolled: false,
        },
        Action::Delete,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    match storage.deactivate_class(class_id).await {
        Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("班级已停用"))),
        Err(e) => {
            error!("Failed to deactivate class {class_id}: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClassUpdateFailed,
                "Failed to deactivate class",
            )))
        }
    }
}
