use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest, UserListParams};
use crate::services::UserService;
use crate::utils::SafeIDI64;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn list_users(
    req: HttpRequest,
    query: web::Query<UserListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(query.into_inner(), &req).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(user_data.into_inner(), &req).await
}

pub async fn list_teachers(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_teachers(&req).await
}

pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_students(&req).await
}

pub async fn get_user(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(user_id.0, &req).await
}

pub async fn update_user(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user(user_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_user(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(user_id.0, &req).await
}

// 配置路由
//
// 列表与创建仅管理员；花名册下拉仅教师/管理员；
// /{id} 三个操作的业务规则在服务层按策略表裁决。
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/teachers")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("/all", web::get().to(list_teachers)),
            )
            .service(
                web::scope("/students")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("/all", web::get().to(list_students)),
            )
            .service(
                web::scope("/{id}")
                    .route("", web::get().to(get_user))
                    .route("", web::put().to(update_user))
                    .route("", web::delete().to(delete_user)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::get().to(list_users))
                    .route("", web::post().to(create_user)),
            ),
    );
}
