use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        entities::UserRole,
        requests::{UserListParams, UserListQuery},
    },
};

pub async fn list_users(
    service: &UserService,
    params: UserListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = UserListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        role: params.role,
        is_active: params.is_active,
        search: params.search,
    };

    match storage.list_users_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => {
            error!("Failed to list users: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list users",
            )))
        }
    }
}

// GET /users/teachers/all：选班级负责人用的下拉列表
pub async fn list_teachers(
    service: &UserService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    list_by_role(service, UserRole::Teacher, request).await
}

// GET /users/students/all：录入选课时用的学生列表
pub async fn list_students(
    service: &UserService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    list_by_role(service, UserRole::Student, request).await
}

async fn list_by_role(
    service: &UserService,
    role: UserRole,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_users_by_role(role).await {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success(users, "查询成功"))),
        Err(e) => {
            error!("Failed to list users by role: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list users",
            )))
        }
    }
}
