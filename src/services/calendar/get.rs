use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CalendarService;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

pub async fn get_event(
    service: &CalendarService,
    event_id: i64,
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
        Action::Read,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(event, "查询成功")))
}
