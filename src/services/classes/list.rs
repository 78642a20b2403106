use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{
    ApiResponse, ErrorCode,
    classes::requests::{ClassListQuery, ClassQueryParams},
    users::entities::UserRole,
};
use crate::services::current_actor;

// GET /classes：管理员看全部，教师看自己的，学生看已选的
pub async fn list_classes(
    service: &ClassService,
    params: ClassQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let mut query = ClassListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        teacher_id: None,
        search: params.search,
    };

    let result = match actor.role {
        UserRole::Admin => storage.list_classes_with_pagination(query).await,
        UserRole::Teacher => {
            query.teacher_id = Some(actor.id);
            storage.list_classes_with_pagination(query).await
        }
        UserRole::Student => storage.list_classes_for_student(actor.id, query).await,
    };

    match result {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => {
            error!("Failed to list classes: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list classes",
            )))
        }
    }
}
