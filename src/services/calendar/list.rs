use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CalendarService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::current_actor;

pub async fn list_events(
    service: &CalendarService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    match storage.list_user_calendar_events(actor.id).await {
        Ok(events) => Ok(HttpResponse::Ok().json(ApiResponse::success(events, "查询成功"))),
        Err(e) => {
            error!("Failed to load calendar events: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to load calendar events",
            )))
        }
    }
}
