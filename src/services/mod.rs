pub mod assignments;
pub mod auth;
pub mod calendar;
pub mod classes;
pub mod materials;
pub mod notes;
pub mod sessions;
pub mod submissions;
pub mod users;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use calendar::CalendarService;
pub use classes::ClassService;
pub use materials::MaterialService;
pub use notes::NoteService;
pub use sessions::SessionService;
pub use submissions::SubmissionService;
pub use users::UserService;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    classes::entities::Class,
    users::entities::{User, UserRole},
};
use crate::policy::{self, Action, Actor, Decision, Resource};
use crate::storage::Storage;

/// 取当前请求的操作者。RequireJWT 已把用户塞进请求扩展，
/// 取不到说明中间件没挂，按 401 处理。
pub(crate) fn current_actor(request: &HttpRequest) -> Result<(User, Actor), HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => {
            let actor = Actor::new(user.id, user.role);
            Ok((user, actor))
        }
        None => Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        ))),
    }
}

/// 加载班级并做班级内容（资料/作业/直播课）的统一鉴权。
/// 班级不存在时 404；学生的读取范围由选课记录决定。
pub(crate) async fn authorize_class_content(
    storage: &Arc<dyn Storage>,
    actor: &Actor,
    class_id: i64,
    action: Action,
) -> Result<Class, HttpResponse> {
    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to load class {class_id}: {e}");
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load class",
                )),
            );
        }
    };

    let enrolled = if actor.role == UserRole::Student {
        match storage.get_enrollment(actor.id, class_id).await {
            Ok(enrollment) => enrollment.is_some(),
            Err(e) => {
                tracing::error!("Failed to load enrollment: {e}");
                return Err(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to load enrollment",
                    )),
                );
            }
        }
    } else {
        false
    };

    let decision = policy::authorize(
        actor,
        &Resource::ClassContent {
            teacher_id: class.teacher_id,
            enrolled,
        },
        action,
    );
    if let Some(resp) = deny_response(&decision) {
        return Err(resp);
    }

    Ok(class)
}

/// 把策略拒绝翻译成 403 响应（Allowed 时返回 None）
pub(crate) fn deny_response(decision: &Decision) -> Option<HttpResponse> {
    match decision {
        Decision::Allowed => None,
        Decision::Denied(reason) => Some(
            HttpResponse::Forbidden()
                .json(ApiResponse::error_empty(ErrorCode::Forbidden, *reason)),
        ),
    }
}
