//! 选课记录存储操作

use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::prelude::Users;
use crate::errors::{LmsError, Result};
use crate::models::enrollments::{entities::Enrollment, responses::RosterEntry};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 选课。重复选课由唯一索引拦截，调用方按唯一约束错误处理
    pub async fn enroll_student_impl(&self, student_id: i64, class_id: i64) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            class_id: Set(class_id),
            enrolled_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("选课失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 查询选课记录
    pub async fn get_enrollment_impl(
        &self,
        student_id: i64,
        class_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(
                Condition::all()
                    .add(Column::StudentId.eq(student_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 班级花名册：选课记录连上学生信息
    pub async fn list_class_roster_impl(&self, class_id: i64) -> Result<Vec<RosterEntry>> {
        let rows = Enrollments::find()
            .filter(Column::ClassId.eq(class_id))
            .find_also_related(Users)
            .order_by_asc(Column::EnrolledAt)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询班级花名册失败: {e}")))?;

        let roster = rows
            .into_iter()
            .filter_map(|(enrollment, user)| {
                // 外键保证学生存在，关联为空的行直接跳过
                user.map(|u| RosterEntry {
                    id: u.id,
                    email: u.email,
                    full_name: u.full_name,
                    enrolled_at: chrono::DateTime::from_timestamp(enrollment.enrolled_at, 0)
                        .unwrap_or_default(),
                })
            })
            .collect();

        Ok(roster)
    }
}
