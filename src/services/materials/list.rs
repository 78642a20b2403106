use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MaterialService;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::Action;
use crate::services::{authorize_class_content, current_actor};

pub async fn list_materials(
    service: &MaterialService,
    class_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    if let Err(resp) = authorize_class_content(&storage, &actor, class_id, Action::Read).await {
        return Ok(resp);
    }

    match storage.list_class_materials(class_id).await {
        Ok(materials) => Ok(HttpResponse::Ok().json(ApiResponse::success(materials, "查询成功"))),
        Err(e) => {
            error!("Failed to list materials for class {class_id}: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list materials",
            )))
        }
    }
}
