use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MaterialService;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::Action;
use crate::services::{authorize_class_content, current_actor};

// GET /materials/{id}：先定位资料再按所属班级鉴权
pub async fn get_material(
    service: &MaterialService,
    material_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let material = match storage.get_material_by_id(material_id).await {
        Ok(Some(material)) => material,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::MaterialNotFound,
                "Material not found",
            )));
        }
        Err(e) => {
            error!("Failed to load material {material_id}: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load material",
                )),
            );
        }
    };

    if let Err(resp) =
        authorize_class_content(&storage, &actor, material.class_id, Action::Read).await
    {
        return Ok(resp);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(material, "查询成功")))
}
