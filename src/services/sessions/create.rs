use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{SessionService, valid_time_range};
use crate::models::{ApiResponse, ErrorCode, sessions::requests::CreateLiveSessionRequest};
use crate::policy::Action;
use crate::services::{authorize_class_content, current_actor};

pub async fn create_session(
    service: &SessionService,
    class_id: i64,
    session_data: CreateLiveSessionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    if let Err(resp) = authorize_class_content(&storage, &actor, class_id, Action::Create).await {
        return Ok(resp);
    }

    if session_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Session title must not be empty",
        )));
    }

    if !valid_time_range(session_data.scheduled_start, session_data.scheduled_end) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidTimeRange,
            "scheduled_start must be earlier than scheduled_end",
        )));
    }

    match storage.create_live_session(class_id, session_data).await {
        Ok(session) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(session, "直播课创建成功")))
        }
        Err(e) => {
            error!("Live session creation failed: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Live session creation failed",
            )))
        }
    }
}
