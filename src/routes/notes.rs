use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::notes::requests::{CreateNoteRequest, UpdateNoteRequest};
use crate::services::NoteService;
use crate::utils::SafeIDI64;

// 懒加载的全局 NoteService 实例
static NOTE_SERVICE: Lazy<NoteService> = Lazy::new(NoteService::new_lazy);

// HTTP处理程序
pub async fn create_note(
    req: HttpRequest,
    note_data: web::Json<CreateNoteRequest>,
) -> ActixResult<HttpResponse> {
    NOTE_SERVICE.create_note(note_data.into_inner(), &req).await
}

pub async fn list_notes(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTE_SERVICE.list_notes(&req).await
}

pub async fn get_note(req: HttpRequest, note_id: SafeIDI64) -> ActixResult<HttpResponse> {
    NOTE_SERVICE.get_note(note_id.0, &req).await
}

pub async fn update_note(
    req: HttpRequest,
    note_id: SafeIDI64,
    update_data: web::Json<UpdateNoteRequest>,
) -> ActixResult<HttpResponse> {
    NOTE_SERVICE
        .update_note(note_id.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_note_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notes")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::put().to(update_note)),
    );
}
