pub mod create;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sessions::requests::{CreateLiveSessionRequest, UpdateLiveSessionRequest};
use crate::storage::Storage;

pub struct SessionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SessionService {
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

    // 排课
    pub async fn create_session(
        &self,
        class_id: i64,
        session_data: CreateLiveSessionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_session(self, class_id, session_data, request).await
    }

    // 列出班级直播课
    pub async fn list_sessions(
        &self,
        class_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_sessions(self, class_id, request).await
    }

    // 根据ID获取直播课
    pub async fn get_session(
        &self,
        session_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_session(self, session_id, request).await
    }

    // 更新直播课（含补录回放地址）
    pub async fn update_session(
        &self,
        session_id: i64,
        session_data: UpdateLiveSessionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_session(self, session_id, session_data, request).await
    }
}

// 开始时间必须早于结束时间
pub(crate) fn valid_time_range(
    start: chrono::DateTime<chrono::Utc>,
    end: chrono::DateTime<chrono::Utc>,
) -> bool {
    start < end
}

#[cfg(test)]
mod tests {
    use super::valid_time_range;
    use chrono::{Duration, Utc};

    #[test]
    fn start_must_precede_end() {
        let now = Utc::now();
        assert!(valid_time_range(now, now + Duration::hours(1)));
        assert!(!valid_time_range(now, now));
        assert!(!valid_time_range(now + Duration::hours(1), now));
    }
}
