use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, classes::requests::CreateClassRequest};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

pub async fn create_class(
    service: &ClassService,
    class_data: CreateClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let decision = policy::authorize(
        &actor,
        &Resource::Class {
            teacher_id: actor.id,
            enrolled: false,
        },
        Action::Create,
    );
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    if class_data.name.trim().is_empty() || class_data.subject.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Class name and subject must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    // 创建者即负责人，管理员创建的班级也归创建者所有
    match storage.create_class(actor.id, class_data).await {
        Ok(class) => Ok(HttpResponse::Created().json(ApiResponse::success(class, "班级创建成功"))),
        Err(e) => {
            error!("Class creation failed: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClassCreationFailed,
                "Class creation failed",
            )))
        }
    }
}
