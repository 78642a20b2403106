//! 日历事件存储操作

use super::SeaOrmStorage;
use crate::entity::calendar_events::{ActiveModel, Column, Entity as CalendarEvents};
use crate::errors::{LmsError, Result};
use crate::models::calendar::{
    entities::CalendarEvent,
    requests::{CreateCalendarEventRequest, UpdateCalendarEventRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建日历事件
    pub async fn create_calendar_event_impl(
        &self,
        user_id: i64,
        req: CreateCalendarEventRequest,
    ) -> Result<CalendarEvent> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            title: Set(req.title),
            description: Set(req.description),
            start_time: Set(req.start_time.timestamp()),
            end_time: Set(req.end_time.timestamp()),
            event_type: Set(req.event_type),
            reference_id: Set(req.reference_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建日历事件失败: {e}")))?;

        Ok(result.into_calendar_event())
    }

    /// 通过 ID 获取日历事件
    pub async fn get_calendar_event_by_id_impl(&self, id: i64) -> Result<Option<CalendarEvent>> {
        let result = CalendarEvents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询日历事件失败: {e}")))?;

        Ok(result.map(|m| m.into_calendar_event()))
    }

    /// 列出用户日历事件，按开始时间正序
    pub async fn list_user_calendar_events_impl(&self, user_id: i64) -> Result<Vec<CalendarEvent>> {
        let events = CalendarEvents::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询用户日历事件失败: {e}")))?;

        Ok(events
            .into_iter()
            .map(|m| m.into_calendar_event())
            .collect())
    }

    /// 更新日历事件
    pub async fn update_calendar_event_impl(
        &self,
        id: i64,
        update: UpdateCalendarEventRequest,
    ) -> Result<Option<CalendarEvent>> {
        let existing = self.get_calendar_event_by_id_impl(id).await?;
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

        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time.timestamp());
        }

        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time.timestamp());
        }

        if let Some(event_type) = update.event_type {
            model.event_type = Set(event_type);
        }

        if let Some(reference_id) = update.reference_id {
            model.reference_id = Set(Some(reference_id));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新日历事件失败: {e}")))?;

        Ok(Some(result.into_calendar_event()))
    }
}
