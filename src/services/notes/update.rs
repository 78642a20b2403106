use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NoteService;
use crate::models::{ApiResponse, ErrorCode, notes::requests::UpdateNoteRequest};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

pub async fn update_note(
    service: &NoteService,
    note_id: i64,
    note_data: UpdateNoteRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let note = match storage.get_note_by_id(note_id).await {
        Ok(Some(note)) => note,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NoteNotFound,
                "Note not found",
            )));
        }
        Err(e) => {
            error!("Failed to load note {note_id}: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load note",
                )),
            );
        }
    };

    let decision = policy::authorize(
        &actor,
        &Resource::OwnedRecord {
            owner_id: note.user_id,
        },
        Action::Update,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    if let Some(title) = &note_data.title {
        if title.trim().is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Note title must not be empty",
            )));
        }
    }

    match storage.update_note(note_id, note_data).await {
        Ok(Some(note)) => Ok(HttpResponse::Ok().json(ApiResponse::success(note, "笔记更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NoteNotFound,
            "Note not found",
        ))),
        Err(e) => {
            error!("Failed to update note {note_id}: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to update note",
            )))
        }
    }
}
