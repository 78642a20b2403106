use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{ApiResponse, ErrorCode, users::responses::UserResponse};
use crate::policy::{self, Action, Resource};
use crate::services::{current_actor, deny_response};

pub async fn get_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (_, actor) = match current_actor(request) {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    // 存在性优先：目标不存在时所有角色统一 404
    let target = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
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
    };

    let decision = policy::authorize(&actor, &Resource::User { target_id: user_id }, Action::Read);
    if let Some(resp) = deny_response(&decision) {
        return Ok(resp);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user: target }, "查询成功")))
}
