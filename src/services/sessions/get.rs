use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SessionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::Action;
use crate::services::{authorize_class_content, current_actor};

pub async fn get_session(
    service: &SessionService,
    session_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let session = match storage.get_live_session_by_id(session_id).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SessionNotFound,
                "Live session not found",
            )));
        }
        Err(e) => {
            error!("Failed to load live session {session_id}: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load live session",
                )),
            );
        }
    };

    if let Err(resp) =
        authorize_class_content(&storage, &actor, session.class_id, Action::Read).await
    {
        return Ok(resp);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(session, "查询成功")))
}
