pub mod create;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notes::requests::{CreateNoteRequest, UpdateNoteRequest};
use crate::storage::Storage;

pub struct NoteService {
    storage: Option<Arc<dyn Storage>>,
}

impl NoteService {
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

    // 创建笔记
    pub async fn create_note(
        &self,
        note_data: CreateNoteRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_note(self, note_data, request).await
    }

    // 列出本人全部笔记
    pub async fn list_notes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_notes(self, request).await
    }

    // 根据ID获取笔记
    pub async fn get_note(&self, note_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_note(self, note_id, request).await
    }

    // 更新笔记
    pub async fn update_note(
        &self,
        note_id: i64,
        note_data: UpdateNoteRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_note(self, note_id, note_data, request).await
    }
}
