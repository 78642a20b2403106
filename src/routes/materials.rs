use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::MaterialService;
use crate::utils::SafeIDI64;

// 懒加载的全局 MaterialService 实例
static MATERIAL_SERVICE: Lazy<MaterialService> = Lazy::new(MaterialService::new_lazy);

// HTTP处理程序
pub async fn upload_material(
    req: HttpRequest,
    class_id: SafeIDI64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .upload_material(class_id.0, payload, &req)
        .await
}

pub async fn list_materials(req: HttpRequest, class_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.list_materials(class_id.0, &req).await
}

pub async fn get_material(req: HttpRequest, material_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.get_material(material_id.0, &req).await
}

// 配置路由
pub fn configure_material_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{id}/materials")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_materials))
            .route("", web::post().to(upload_material)),
    );
    cfg.service(
        web::scope("/api/v1/materials")
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::get().to(get_material)),
    );
}
