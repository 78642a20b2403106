use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

// DELETE /users/{id}：软删除（停用）。对已停用账号重复调用同样返回成功
pub async fn delete_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    match storage.get_user_by_id(user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            error!("Failed to load user {user_id}: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load user",
                )),
            );
        }
    }

    let decision = policy::authorize(&actor, &Resource::User { target_id: user_id }, Action::Delete);
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    match storage.deactivate_user(user_id).await {
        Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("用户已停用"))),
        Err(e) => {
            error!("Failed to deactivate user {user_id}: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserUpdateFailed,
                "Failed to deactivate user",
            )))
        }
    }
}
