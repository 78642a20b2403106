use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::calendar::requests::{CreateCalendarEventRequest, UpdateCalendarEventRequest};
use crate::services::CalendarService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CalendarService 实例
static CALENDAR_SERVICE: Lazy<CalendarService> = Lazy::new(CalendarService::new_lazy);

// HTTP处理程序
pub async fn create_event(
    req: HttpRequest,
    event_data: web::Json<CreateCalendarEventRequest>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .create_event(event_data.into_inner(), &req)
        .await
}

pub async fn list_events(req: HttpRequest) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE.list_events(&req).await
}

pub async fn get_event(req: HttpRequest, event_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE.get_event(event_id.0, &req).await
}

pub async fn update_event(
    req: HttpRequest,
    event_id: SafeIDI64,
    update_data: web::Json<UpdateCalendarEventRequest>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .update_event(event_id.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_calendar_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/calendar")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_events))
            .route("", web::post().to(create_event))
            .route("/{id}", web::get().to(get_event))
            .route("/{id}", web::put().to(update_event)),
    );
}
