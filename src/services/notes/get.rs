use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NoteService;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

pub async fn get_note(
    service: &NoteService,
    note_id: i64,
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
        Action::Read,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(note, "查询成功")))
}
