pub mod create;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::calendar::requests::{CreateCalendarEventRequest, UpdateCalendarEventRequest};
use crate::storage::Storage;

pub struct CalendarService {
    storage: Option<Arc<dyn Storage>>,
}

impl CalendarService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建日历事件
    pub async fn create_event(
        &self,
        event_data: CreateCalendarEventRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_event(self, event_data, request).await
    }

    // 列出本人全部日历事件
    pub async fn list_events(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_events(self, request).await
    }

    // 根据ID获取日历事件
    pub async fn get_event(
        &self,
        event_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_event(self, event_id, request).await
    }

    // 更新日历事件
    pub async fn update_event(
        &self,
        event_id: i64,
        event_data: UpdateCalendarEventRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_event(self, event_id, event_data, request).await
    }
}
