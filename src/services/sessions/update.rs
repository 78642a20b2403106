use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{SessionService, valid_time_range};
use crate::models::{ApiResponse, ErrorCode, sessions::requests::UpdateLiveSessionRequest};
use crate::policy::Action;
use crate::services::{authorize_class_content, current_actor};

pub async fn update_session(
    service: &SessionService,
    session_id: i64,
    session_data: UpdateLiveSessionRequest,
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
        authorize_class_content(&storage, &actor, session.class_id, Action::Update).await
    {
        return Ok(resp);
    }

    if let Some(title) = &session_data.title {
        if title.trim().is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Session title must not be empty",
            )));
        }
    }

    // 部分更新时间时与库中另一端合并校验
    let start = session_data
        .scheduled_start
        .unwrap_or(session.scheduled_start);
    let end = session_data.scheduled_end.unwrap_or(session.scheduled_end);
    if !valid_time_range(start, end) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidTimeRange,
            "scheduled_start must be earlier than scheduled_end",
        )));
    }

    match storage.update_live_session(session_id, session_data).await {
        Ok(Some(session)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(session, "直播课更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SessionNotFound,
            "Live session not found",
        ))),
        Err(e) => {
            error!("Failed to update live session {session_id}: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to update live session",
            )))
        }
    }
}
