//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod calendar_events;
mod classes;
mod enrollments;
mod live_sessions;
mod materials;
mod notes;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{LmsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let storage = Self::new_with_url(&config.database.url, config.database.pool_size).await?;
        info!("SeaORM 存储初始化完成，数据库: {}", config.database.url);
        Ok(storage)
    }

    /// 按指定 URL 建立连接并跑迁移（测试也走这里）
    pub async fn new_with_url(url: &str, pool_size: u32) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, pool_size).await?
        } else {
            Self::connect_generic(&db_url, pool_size).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LmsError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LmsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32) -> Result<DatabaseConnection> {
        let config = AppConfig::get();
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LmsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
    },
    calendar::{
        entities::CalendarEvent,
        requests::{CreateCalendarEventRequest, UpdateCalendarEventRequest},
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    enrollments::{entities::Enrollment, responses::RosterEntry},
    materials::entities::{Material, NewMaterial},
    notes::{
        entities::Note,
        requests::{CreateNoteRequest, UpdateNoteRequest},
    },
    sessions::{
        entities::LiveSession,
        requests::{CreateLiveSessionRequest, UpdateLiveSessionRequest},
    },
    submissions::{
        entities::Submission,
        requests::{CreateSubmissionRequest, GradeSubmissionRequest},
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>> {
        self.list_users_by_role_impl(role).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn deactivate_user(&self, id: i64) -> Result<bool> {
        self.deactivate_user_impl(id).await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    // 班级模块
    async fn create_class(&self, teacher_id: i64, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(teacher_id, class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn list_classes_for_student(
        &self,
        student_id: i64,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_classes_for_student_impl(student_id, query).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn deactivate_class(&self, class_id: i64) -> Result<bool> {
        self.deactivate_class_impl(class_id).await
    }

    // 选课模块
    async fn enroll_student(&self, student_id: i64, class_id: i64) -> Result<Enrollment> {
        self.enroll_student_impl(student_id, class_id).await
    }

    async fn get_enrollment(&self, student_id: i64, class_id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(student_id, class_id).await
    }

    async fn list_class_roster(&self, class_id: i64) -> Result<Vec<RosterEntry>> {
        self.list_class_roster_impl(class_id).await
    }

    // 资料模块
    async fn create_material(&self, material: NewMaterial) -> Result<Material> {
        self.create_material_impl(material).await
    }

    async fn get_material_by_id(&self, id: i64) -> Result<Option<Material>> {
        self.get_material_by_id_impl(id).await
    }

    async fn list_class_materials(&self, class_id: i64) -> Result<Vec<Material>> {
        self.list_class_materials_impl(class_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        class_id: i64,
        teacher_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(class_id, teacher_id, assignment)
            .await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_class_assignments(&self, class_id: i64) -> Result<Vec<Assignment>> {
        self.list_class_assignments_impl(class_id).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    // 提交模块
    async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission: CreateSubmissionRequest,
    ) -> Result<Submission> {
        self.create_submission_impl(assignment_id, student_id, submission)
            .await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_by_assignment_and_student_impl(assignment_id, student_id)
            .await
    }

    async fn list_assignment_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_assignment_submissions_impl(assignment_id).await
    }

    async fn grade_submission(
        &self,
        id: i64,
        grade: GradeSubmissionRequest,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(id, grade).await
    }

    // 直播课模块
    async fn create_live_session(
        &self,
        class_id: i64,
        session: CreateLiveSessionRequest,
    ) -> Result<LiveSession> {
        self.create_live_session_impl(class_id, session).await
    }

    async fn get_live_session_by_id(&self, id: i64) -> Result<Option<LiveSession>> {
        self.get_live_session_by_id_impl(id).await
    }

    async fn list_class_live_sessions(&self, class_id: i64) -> Result<Vec<LiveSession>> {
        self.list_class_live_sessions_impl(class_id).await
    }

    async fn update_live_session(
        &self,
        id: i64,
        update: UpdateLiveSessionRequest,
    ) -> Result<Option<LiveSession>> {
        self.update_live_session_impl(id, update).await
    }

    // 笔记模块
    async fn create_note(&self, user_id: i64, note: CreateNoteRequest) -> Result<Note> {
        self.create_note_impl(user_id, note).await
    }

    async fn get_note_by_id(&self, id: i64) -> Result<Option<Note>> {
        self.get_note_by_id_impl(id).await
    }

    async fn list_user_notes(&self, user_id: i64) -> Result<Vec<Note>> {
        self.list_user_notes_impl(user_id).await
    }

    async fn update_note(&self, id: i64, update: UpdateNoteRequest) -> Result<Option<Note>> {
        self.update_note_impl(id, update).await
    }

    // 日历模块
    async fn create_calendar_event(
        &self,
        user_id: i64,
        event: CreateCalendarEventRequest,
    ) -> Result<CalendarEvent> {
        self.create_calendar_event_impl(user_id, event).await
    }

    async fn get_calendar_event_by_id(&self, id: i64) -> Result<Option<CalendarEvent>> {
        self.get_calendar_event_by_id_impl(id).await
    }

    async fn list_user_calendar_events(&self, user_id: i64) -> Result<Vec<CalendarEvent>> {
        self.list_user_calendar_events_impl(user_id).await
    }

    async fn update_calendar_event(
        &self,
        id: i64,
        update: UpdateCalendarEventRequest,
    ) -> Result<Option<CalendarEvent>> {
        self.update_calendar_event_impl(id, update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::requests::CreateUserRequest;

    // 内存库连接池必须为 1，否则每个连接各自一份数据库
    async fn memory_storage() -> SeaOrmStorage {
        SeaOrmStorage::new_with_url(":memory:", 1)
            .await
            .expect("打开内存数据库失败")
    }

    fn student_req(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            full_name: "测试学生".to_string(),
            password: "hash-placeholder".to_string(),
            role: UserRole::Student,
        }
    }

    #[tokio::test]
    async fn user_create_then_read_roundtrip() {
        let storage = memory_storage().await;

        let created = storage.create_user(student_req("s1@example.com")).await.unwrap();
        assert!(created.id > 0);
        assert!(created.is_active);

        let fetched = storage.get_user_by_email("s1@example.com").await.unwrap();
        assert_eq!(fetched.unwrap().id, created.id);
    }

    #[tokio::test]
    async fn deactivate_user_is_idempotent_and_keeps_row() {
        let storage = memory_storage().await;
        let user = storage.create_user(student_req("s2@example.com")).await.unwrap();

        assert!(storage.deactivate_user(user.id).await.unwrap());
        // 再停用一次仍然成功
        assert!(storage.deactivate_user(user.id).await.unwrap());

        // 软删除后按 ID 仍可查到，只是 is_active 翻为 false
        let fetched = storage.get_user_by_id(user.id).await.unwrap().unwrap();
        assert!(!fetched.is_active);
    }

    #[tokio::test]
    async fn duplicate_enrollment_hits_unique_index() {
        let storage = memory_storage().await;

        let teacher = storage
            .create_user(CreateUserRequest {
                email: "t@example.com".to_string(),
                full_name: "测试教师".to_string(),
                password: "hash-placeholder".to_string(),
                role: UserRole::Teacher,
            })
            .await
            .unwrap();
        let student = storage.create_user(student_req("s3@example.com")).await.unwrap();
        let class = storage
            .create_class(
                teacher.id,
                CreateClassRequest {
                    name: "代数".to_string(),
                    subject: "数学".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();

        storage.enroll_student(student.id, class.id).await.unwrap();

        let err = storage
            .enroll_student(student.id, class.id)
            .await
            .expect_err("重复选课应触发唯一约束");
        assert!(err.is_unique_violation(), "非预期错误: {err}");
    }

    #[tokio::test]
    async fn deactivated_class_hidden_from_list_but_fetchable() {
        let storage = memory_storage().await;

        let teacher = storage
            .create_user(CreateUserRequest {
                email: "t2@example.com".to_string(),
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

        storage.deactivate_class(class.id).await.unwrap();

        let listed = storage
            .list_classes_with_pagination(ClassListQuery::default())
            .await
            .unwrap();
        assert!(listed.items.iter().all(|c| c.id != class.id));

        let fetched = storage.get_class_by_id(class.id).await.unwrap().unwrap();
        assert!(!fetched.is_active);
    }

    #[tokio::test]
    async fn grade_overwrite_updates_in_place() {
        let storage = memory_storage().await;

        let teacher = storage
            .create_user(CreateUserRequest {
                email: "t3@example.com".to_string(),
                full_name: "测试教师".to_string(),
                password: "hash-placeholder".to_string(),
                role: UserRole::Teacher,
            })
            .await
            .unwrap();
        let student = storage.create_user(student_req("s4@example.com")).await.unwrap();
        let class = storage
            .create_class(
                teacher.id,
                CreateClassRequest {
                    name: "物理".to_string(),
                    subject: "物理".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();
        storage.enroll_student(student.id, class.id).await.unwrap();

        let assignment = storage
            .create_assignment(
                class.id,
                teacher.id,
                CreateAssignmentRequest {
                    title: "第一章习题".to_string(),
                    description: "完成 1-10 题".to_string(),
                    due_date: chrono::Utc::now() + chrono::Duration::days(7),
                    max_points: 100,
                },
            )
            .await
            .unwrap();

        let submission = storage
            .create_submission(
                assignment.id,
                student.id,
                CreateSubmissionRequest {
                    text_content: Some("我的答案".to_string()),
                    file_url: None,
                },
            )
            .await
            .unwrap();
        assert!(submission.grade.is_none());

        let graded = storage
            .grade_submission(
                submission.id,
                GradeSubmissionRequest {
                    grade: 80,
                    feedback: Some("不错".to_string()),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(graded.grade, Some(80));

        // 重复批改是覆盖而非追加
        let regraded = storage
            .grade_submission(
                submission.id,
                GradeSubmissionRequest {
                    grade: 95,
                    feedback: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(regraded.grade, Some(95));
        assert_eq!(regraded.id, submission.id);
    }

    #[tokio::test]
    async fn student_class_list_scoped_by_enrollment() {
        let storage = memory_storage().await;

        let teacher = storage
            .create_user(CreateUserRequest {
                email: "t4@example.com".to_string(),
                full_name: "测试教师".to_string(),
                password: "hash-placeholder".to_string(),
                role: UserRole::Teacher,
            })
            .await
            .unwrap();
        let student = storage.create_user(student_req("s5@example.com")).await.unwrap();

        let enrolled_class = storage
            .create_class(
                teacher.id,
                CreateClassRequest {
                    name: "化学".to_string(),
                    subject: "化学".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();
        let other_class = storage
            .create_class(
                teacher.id,
                CreateClassRequest {
                    name: "生物".to_string(),
                    subject: "生物".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();

        storage
            .enroll_student(student.id, enrolled_class.id)
            .await
            .unwrap();

        // 学生口径只包含已选班级
        let mine = storage
            .list_classes_for_student(student.id, ClassListQuery::default())
            .await
            .unwrap();
        assert_eq!(mine.items.len(), 1);
        assert_eq!(mine.items[0].id, enrolled_class.id);

        // 全量口径两个都在
        let all = storage
            .list_classes_with_pagination(ClassListQuery::default())
            .await
            .unwrap();
        assert!(all.items.iter().any(|c| c.id == other_class.id));

        // 花名册含学生信息
        let roster = storage.list_class_roster(enrolled_class.id).await.unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, student.id);
    }
}
