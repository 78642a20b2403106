//! 作业提交存储操作

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{LmsError, Result};
use crate::models::submissions::{
    entities::Submission,
    requests::{CreateSubmissionRequest, GradeSubmissionRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 提交作业，成绩与评语初始为空
    pub async fn create_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        req: CreateSubmissionRequest,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            text_content: Set(req.text_content),
            file_url: Set(req.file_url),
            submitted_at: Set(now),
            grade: Set(None),
            feedback: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("提交作业失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 查询某学生对某作业的提交
    pub async fn get_submission_by_assignment_and_student_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(
                Condition::all()
                    .add(Column::AssignmentId.eq(assignment_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 列出作业的全部提交，按提交时间正序
    pub async fn list_assignment_submissions_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let submissions = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业提交列表失败: {e}")))?;

        Ok(submissions
            .into_iter()
            .map(|m| m.into_submission())
            .collect())
    }

    /// 批改。成绩与评语整体覆盖，重复批改即重新打分
    pub async fn grade_submission_impl(
        &self,
        id: i64,
        grade: GradeSubmissionRequest,
    ) -> Result<Option<Submission>> {
        let existing = self.get_submission_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            grade: Set(Some(grade.grade)),
            feedback: Set(grade.feedback),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("批改提交失败: {e}")))?;

        Ok(Some(result.into_submission()))
    }
}
