pub mod assignments;
pub mod auth;
pub mod calendar;
pub mod classes;
pub mod materials;
pub mod notes;
pub mod sessions;
pub mod submissions;
pub mod users;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use calendar::configure_calendar_routes;
pub use classes::configure_classes_routes;
pub use materials::configure_material_routes;
pub use notes::configure_note_routes;
pub use sessions::configure_session_routes;
pub use submissions::configure_submission_routes;
pub use users::configure_user_routes;

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use std::sync::Arc;

    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::models::classes::requests::CreateClassRequest;
    use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::utils::jwt::JwtUtils;

    // 返回 (存储, 教师 token, 班级 ID, 作业 ID)
    async fn seeded_storage() -> (Arc<dyn Storage>, String, i64, i64) {
        let storage = SeaOrmStorage::new_with_url(":memory:", 1)
            .await
            .expect("打开内存数据库失败");

        let teacher = storage
            .create_user(CreateUserRequest {
                email: "t@example.com".to_string(),
                full_name: "测试教师".to_string(),
                password: "hash-placeholder".to_string(),
                role: UserRole::Teacher,
            })
            .await
            .unwrap();
        let class = storage
            .create_class(
                teacher.id,
                CreateClassRequest {
                    name: "几何".to_string(),
                    subject: "数学".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();
        let assignment = storage
            .create_assignment(
                class.id,
                teacher.id,
                CreateAssignmentRequest {
                    title: "第一次作业".to_string(),
                    description: "课后习题".to_string(),
                    due_date: chrono::Utc::now() + chrono::Duration::days(7),
                    max_points: 100,
                },
            )
            .await
            .unwrap();

        let token = JwtUtils::generate_access_token(teacher.id, &teacher.role.to_string())
            .expect("签发测试 token 失败");

        let storage: Arc<dyn Storage> = Arc::new(storage);
        (storage, token, class.id, assignment.id)
    }

    /// 按 main.rs 的顺序注册全部路由
    fn configure_all(cfg: &mut web::ServiceConfig) {
        super::configure_auth_routes(cfg);
        super::configure_user_routes(cfg);
        super::configure_material_routes(cfg);
        super::configure_submission_routes(cfg);
        super::configure_assignment_routes(cfg);
        super::configure_session_routes(cfg);
        super::configure_classes_routes(cfg);
        super::configure_note_routes(cfg);
        super::configure_calendar_routes(cfg);
    }

    // 作用域按前缀匹配且不回溯，嵌套作用域若排在父级之后整条路径都会 404。
    // 这里带合法 token 把每条嵌套路径都打一遍。
    #[actix_web::test]
    async fn nested_scopes_are_reachable() {
        let (storage, token, class_id, assignment_id) = seeded_storage().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_all),
        )
        .await;

        let paths = [
            format!("/api/v1/classes/{class_id}"),
            format!("/api/v1/classes/{class_id}/materials"),
            format!("/api/v1/classes/{class_id}/assignments"),
            format!("/api/v1/classes/{class_id}/sessions"),
            format!("/api/v1/assignments/{assignment_id}"),
            format!("/api/v1/assignments/{assignment_id}/submissions"),
            "/api/v1/classes".to_string(),
            "/api/v1/notes".to_string(),
            "/api/v1/calendar".to_string(),
        ];

        for path in &paths {
            let req = test::TestRequest::get()
                .uri(path)
                .insert_header(("Authorization", format!("Bearer {token}")))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "GET {path}");
        }
    }

    #[actix_web::test]
    async fn missing_token_is_rejected_before_routing() {
        let (storage, _token, class_id, _assignment_id) = seeded_storage().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_all),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/classes/{class_id}/materials"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
