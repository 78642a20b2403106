use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::path::Path;

use super::MaterialService;
use crate::config::AppConfig;
use crate::models::materials::entities::NewMaterial;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::Action;
use crate::services::{authorize_class_content, current_actor};

// POST /classes/{id}/materials：multipart 里取 file + title + description，
// 文件本体进对象存储，库里只留 URL 与元数据
pub async fn upload_material(
    service: &MaterialService,
    class_id: i64,
    mut payload: Multipart,
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

    let config = AppConfig::get();
    let max_size = config.object_store.max_size;
    let allowed_types = &config.object_store.allowed_types;

    let mut title = String::new();
    let mut description: Option<String> = None;
    let mut original_name = String::new();
    let mut content_type = String::new();
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        match name.as_str() {
            "file" => {
                if file_bytes.is_some() {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::MultifileUploadNotAllowed,
                        "Only one file can be uploaded at a time",
                    )));
                }

                original_name = content_disposition
                    .and_then(|cd| cd.get_filename())
                    .map(|s| s.to_string())
                    .unwrap_or_default();

                // 扩展名白名单
                let extension = Path::new(&original_name)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| format!(".{}", ext.to_lowercase()))
                    .unwrap_or_default();

                if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileTypeNotAllowed,
                        "File type not allowed",
                    )));
                }

                content_type = field
                    .content_type()
                    .map(|ct| ct.to_string())
                    .unwrap_or_default();

                let mut bytes: Vec<u8> = Vec::new();
                while let Some(chunk) = field.next().await {
                    let data = chunk?;
                    if bytes.len() + data.len() > max_size {
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::FileSizeExceeded,
                            "File size exceeds the limit",
                        )));
                    }
                    bytes.extend_from_slice(&data);
                }
                file_bytes = Some(bytes);
            }
            "title" => {
                title = read_text_field(&mut field).await?;
            }
            "description" => {
                let text = read_text_field(&mut field).await?;
                if !text.is_empty() {
                    description = Some(text);
                }
            }
            _ => {
                // 忽略未知字段，把流排干
                while field.next().await.is_some() {}
            }
        }
    }

    let Some(bytes) = file_bytes else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        )));
    };

    if title.trim().is_empty() {
        // 缺省用文件名当标题
        title = original_name.clone();
    }

    let file_size = bytes.len() as i64;
    let object_store = service.get_object_store(request);

    let file_url = match object_store
        .put_object(bytes, &original_name, &content_type)
        .await
    {
        Ok(url) => url,
        Err(e) => {
            tracing::error!("Object store upload failed: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    "File upload failed",
                )),
            );
        }
    };

    let new_material = NewMaterial {
        class_id,
        title,
        description,
        file_url: file_url.clone(),
        file_type: content_type,
        file_size: Some(file_size),
    };

    match storage.create_material(new_material).await {
        Ok(material) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(material, "资料上传成功")))
        }
        Err(e) => {
            // 入库失败时回收已写入的对象
            let _ = object_store.delete_object(&file_url).await;
            tracing::error!("Failed to record material: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                "Failed to record material",
            )))
        }
    }
}

async fn read_text_field(field: &mut actix_multipart::Field) -> actix_web::Result<String> {
    let mut bytes: Vec<u8> = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk?);
    }
    Ok(String::from_utf8_lossy(&bytes).trim().to_string())
}
