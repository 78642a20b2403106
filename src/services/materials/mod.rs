pub mod get;
pub mod list;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::{Storage, object_store::ObjectStore};

pub struct MaterialService {
    storage: Option<Arc<dyn Storage>>,
}

impl MaterialService {
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

    pub(crate) fn get_object_store(&self, request: &HttpRequest) -> Arc<dyn ObjectStore> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectStore>>>()
            .expect("Object store not found in app data")
            .get_ref()
            .clone()
    }

    // 上传课程资料（multipart）
    pub async fn upload_material(
        &self,
        class_id: i64,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upload::upload_material(self, class_id, payload, request).await
    }

    // 列出班级资料
    pub async fn list_materials(
        &self,
        class_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_materials(self, class_id, request).await
    }

    // 根据ID获取资料
    pub async fn get_material(
        &self,
        material_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_material(self, material_id, request).await
    }
}
