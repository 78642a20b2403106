use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::sessions::requests::{CreateLiveSessionRequest, UpdateLiveSessionRequest};
use crate::services::SessionService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SessionService 实例
static SESSION_SERVICE: Lazy<SessionService> = Lazy::new(SessionService::new_lazy);

// HTTP处理程序
pub async fn create_session(
    req: HttpRequest,
    class_id: SafeIDI64,
    session_data: web::Json<CreateLiveSessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .create_session(class_id.0, session_data.into_inner(), &req)
        .await
}

pub async fn list_sessions(req: HttpRequest, class_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.list_sessions(class_id.0, &req).await
}

pub async fn get_session(req: HttpRequest, session_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.get_session(session_id.0, &req).await
}

pub async fn update_session(
    req: HttpRequest,
    session_id: SafeIDI64,
    update_data: web::Json<UpdateLiveSessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .update_session(session_id.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{id}/sessions")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_sessions))
            .route("", web::post().to(create_session)),
    );
    cfg.service(
        web::scope("/api/v1/sessions")
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::get().to(get_session))
            .route("/{id}", web::put().to(update_session)),
    );
}
