use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{entities::UserRole, requests::UpdateUserRequest, responses::UserResponse},
};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_full_name, validate_password_simple};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    if storage
        .get_user_by_id(user_id)
        .await
        .map_err(|e| {
            error!("Failed to load user {user_id}: {e}");
            actix_web::error::ErrorInternalServerError(e)
        })?
        .is_none()
    {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        )));
    }

    let decision = policy::authorize(&actor, &Resource::User { target_id: user_id }, Action::Update);
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    // 角色与启停状态只有管理员能动，本人改资料不包含这两项
    if actor.role != UserRole::Admin
        && (update_data.role.is_some() || update_data.is_active.is_some())
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Only admins may change role or active status",
        )));
    }

    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    if let Some(ref full_name) = update_data.full_name
        && let Err(msg) = validate_full_name(full_name)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Some(ref password) = update_data.password {
        if let Err(msg) = validate_password_simple(password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::PasswordTooWeak, msg)));
        }
        update_data.password = Some(hash_password(password).map_err(|e| {
            error!("Password hashing failed: {e}");
            actix_web::error::ErrorInternalServerError(e)
        })?);
    }

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user }, "更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserAlreadyExists, "Email already exists"),
        )),
        Err(e) => {
            error!("Failed to update user {user_id}: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserUpdateFailed,
                "Failed to update user",
            )))
        }
    }
}
