use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NoteService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::current_actor;

pub async fn list_notes(service: &NoteService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    match storage.list_user_notes(actor.id).await {
        Ok(notes) => Ok(HttpResponse::Ok().json(ApiResponse::success(notes, "查询成功"))),
        Err(e) => {
            error!("Failed to load notes: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to load notes",
            )))
        }
    }
}
