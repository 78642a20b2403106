use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CalendarService;
use crate::models::{ApiResponse, ErrorCode, calendar::requests::CreateCalendarEventRequest};
use crate::services::{current_actor, sessions::valid_time_range};

pub async fn create_event(
    service: &CalendarService,
    event_data: CreateCalendarEventRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    if event_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Event title must not be empty",
        )));
    }

    if !valid_time_range(event_data.start_time, event_data.end_time) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidTimeRange,
            "start_time must be earlier than end_time",
        )));
    }

    let storage = service.get_storage(request);

    // reference_id 是跨表松指针，指向什么由 event_type 决定，不校验
    match storage.create_calendar_event(actor.id, event_data).await {
        Ok(event) => Ok(HttpResponse::Created().json(ApiResponse::success(event, "事件创建成功"))),
        Err(e) => {
            error!("Calendar event creation failed: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Calendar event creation failed",
            )))
        }
    }
}
