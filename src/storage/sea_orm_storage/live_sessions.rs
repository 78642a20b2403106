//! 直播课存储操作

use super::SeaOrmStorage;
use crate::entity::live_sessions::{ActiveModel, Column, Entity as LiveSessions};
use crate::errors::{LmsError, Result};
use crate::models::sessions::{
    entities::LiveSession,
    requests::{CreateLiveSessionRequest, UpdateLiveSessionRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 安排直播课
    pub async fn create_live_session_impl(
        &self,
        class_id: i64,
        req: CreateLiveSessionRequest,
    ) -> Result<LiveSession> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            title: Set(req.title),
            description: Set(req.description),
            scheduled_start: Set(req.scheduled_start.timestamp()),
            scheduled_end: Set(req.scheduled_end.timestamp()),
            meeting_url: Set(req.meeting_url),
            meeting_id: Set(req.meeting_id),
            is_recorded: Set(false),
            recording_url: Set(None),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建直播课失败: {e}")))?;

        Ok(result.into_live_session())
    }

    /// 通过 ID 获取直播课
    pub async fn get_live_session_by_id_impl(&self, id: i64) -> Result<Option<LiveSession>> {
        let result = LiveSessions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询直播课失败: {e}")))?;

        Ok(result.map(|m| m.into_live_session()))
    }

    /// 列出班级直播课，按开始时间正序
    pub async fn list_class_live_sessions_impl(&self, class_id: i64) -> Result<Vec<LiveSession>> {
        let sessions = LiveSessions::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::ScheduledStart)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询班级直播课失败: {e}")))?;

        Ok(sessions
            .into_iter()
            .map(|m| m.into_live_session())
            .collect())
    }

    /// 更新直播课
    pub async fn update_live_session_impl(
        &self,
        id: i64,
        update: UpdateLiveSessionRequest,
    ) -> Result<Option<LiveSession>> {
        let existing = self.get_live_session_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(scheduled_start) = update.scheduled_start {
            model.scheduled_start = Set(scheduled_start.timestamp());
        }

        if let Some(scheduled_end) = update.scheduled_end {
            model.scheduled_end = Set(scheduled_end.timestamp());
        }

        if let Some(meeting_url) = update.meeting_url {
            model.meeting_url = Set(Some(meeting_url));
        }

        if let Some(meeting_id) = update.meeting_id {
            model.meeting_id = Set(Some(meeting_id));
        }

        if let Some(is_recorded) = update.is_recorded {
            model.is_recorded = Set(is_recorded);
        }

        if let Some(recording_url) = update.recording_url {
            model.recording_url = Set(Some(recording_url));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新直播课失败: {e}")))?;

        self.get_live_session_by_id_impl(id).await
    }
}
