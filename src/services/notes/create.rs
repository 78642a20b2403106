use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NoteService;
use crate::models::{ApiResponse, ErrorCode, notes::requests::CreateNoteRequest};
use crate::services::current_actor;

pub async fn create_note(
    service: &NoteService,
    note_data: CreateNoteRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    if note_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Note title must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    // class_id 只是个松引用，不校验存在性
    match storage.create_note(actor.id, note_data).await {
        Ok(note) => Ok(HttpResponse::Created().json(ApiResponse::success(note, "笔记创建成功"))),
        Err(e) => {
            error!("Note creation failed: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Note creation failed",
            )))
        }
    }
}
