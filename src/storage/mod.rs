use std::sync::Arc;

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

use crate::errors::Result;

pub mod object_store;
pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段此时已是哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 按角色列出活跃用户（教师/学生下拉列表）
    async fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 停用用户（软删除，幂等）
    async fn deactivate_user(&self, id: i64) -> Result<bool>;
    // 按角色统计用户数量
    async fn count_users_by_role(&self, role: UserRole) -> Result<u64>;

    /// 班级管理方法
    // 创建班级，teacher_id 为创建者
    async fn create_class(&self, teacher_id: i64, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出班级（管理员全量 / 教师按 teacher_id 过滤）
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 列出某学生已选的班级
    async fn list_classes_for_student(
        &self,
        student_id: i64,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 停用班级（软删除，幂等）
    async fn deactivate_class(&self, class_id: i64) -> Result<bool>;

    /// 选课管理方法
    // 选课，(student_id, class_id) 违反唯一约束时返回错误
    async fn enroll_student(&self, student_id: i64, class_id: i64) -> Result<Enrollment>;
    // 查询选课记录
    async fn get_enrollment(&self, student_id: i64, class_id: i64) -> Result<Option<Enrollment>>;
    // 班级花名册（学生信息 + 选课时间）
    async fn list_class_roster(&self, class_id: i64) -> Result<Vec<RosterEntry>>;

    /// 课程资料方法
    // 登记资料（文件已上传至对象存储）
    async fn create_material(&self, material: NewMaterial) -> Result<Material>;
    // 通过ID获取资料
    async fn get_material_by_id(&self, id: i64) -> Result<Option<Material>>;
    // 列出班级资料
    async fn list_class_materials(&self, class_id: i64) -> Result<Vec<Material>>;

    /// 作业管理方法
    // 布置作业
    async fn create_assignment(
        &self,
        class_id: i64,
        teacher_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 列出班级作业
    async fn list_class_assignments(&self, class_id: i64) -> Result<Vec<Assignment>>;
    // 更新作业
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;

    /// 提交管理方法
    // 提交作业
    async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission: CreateSubmissionRequest,
    ) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 查询某学生对某作业的提交
    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 列出作业的全部提交
    async fn list_assignment_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>>;
    // 批改（覆盖写，重复批改为更新）
    async fn grade_submission(
        &self,
        id: i64,
        grade: GradeSubmissionRequest,
    ) -> Result<Option<Submission>>;

    /// 直播课方法
    async fn create_live_session(
        &self,
        class_id: i64,
        session: CreateLiveSessionRequest,
    ) -> Result<LiveSession>;
    async fn get_live_session_by_id(&self, id: i64) -> Result<Option<LiveSession>>;
    async fn list_class_live_sessions(&self, class_id: i64) -> Result<Vec<LiveSession>>;
    async fn update_live_session(
        &self,
        id: i64,
        update: UpdateLiveSessionRequest,
    ) -> Result<Option<LiveSession>>;

    /// 笔记方法
    async fn create_note(&self, user_id: i64, note: CreateNoteRequest) -> Result<Note>;
    async fn get_note_by_id(&self, id: i64) -> Result<Option<Note>>;
    async fn list_user_notes(&self, user_id: i64) -> Result<Vec<Note>>;
    async fn update_note(&self, id: i64, update: UpdateNoteRequest) -> Result<Option<Note>>;

    /// 日历事件方法
    async fn create_calendar_event(
        &self,
        user_id: i64,
        event: CreateCalendarEventRequest,
    ) -> Result<CalendarEvent>;
    async fn get_calendar_event_by_id(&self, id: i64) -> Result<Option<CalendarEvent>>;
    async fn list_user_calendar_events(&self, user_id: i64) -> Result<Vec<CalendarEvent>>;
    async fn update_calendar_event(
        &self,
        id: i64,
        update: UpdateCalendarEventRequest,
    ) -> Result<Option<CalendarEvent>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
