use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CalendarService;
use crate::models::{ApiResponse, ErrorCode, calendar::requests::UpdateCalendarEventRequest};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response, sessions::valid_time_range};

pub async fn update_event(
    service: &CalendarService,
    event_id: i64,
    event_data: UpdateCalendarEventRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let event = match storage.get_calendar_event_by_id(event_id).await {
        Ok(Some(event)) => event,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EventNotFound,
                "Calendar event not found",
            )));
        }
        Err(e) => {
            error!("Failed to load calendar event {event_id}: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load calendar event",
                )),
            );
        }
    };

    let decision = policy::authorize(
        &actor,
        &Resource::OwnedRecord {
            owner_id: event.user_id,
        },
        Action::Update,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    if let Some(title) = &event_data.title {
        if title.trim().is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Event title must not be empty",
            )));
        }
    }

    // 部分更新时间时与库中另一端合并校验
    let start = event_data.start_time.unwrap_or(event.start_time);
    let end = event_data.end_time.unwrap_or(event.end_time);
    if !valid_time_range(start, end) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidTimeRange,
            "start_time must be earlier than end_time",
        )));
    }

    match storage.update_calendar_event(event_id, event_data).await {
        Ok(Some(event)) => Ok(HttpResponse::Ok().json(ApiResponse::success(event, "事件更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EventNotFound,
            "Calendar event not found",
        ))),
        Err(e) => {
            error!("Failed to update calendar event {event_id}: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to update calendar event",
            )))
        }
    }
}
