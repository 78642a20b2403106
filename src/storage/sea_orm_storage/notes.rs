//! 个人笔记存储操作

use super::SeaOrmStorage;
use crate::entity::notes::{ActiveModel, Column, Entity as Notes};
use crate::errors::{LmsError, Result};
use crate::models::notes::{
    entities::Note,
    requests::{CreateNoteRequest, UpdateNoteRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建笔记
    pub async fn create_note_impl(&self, user_id: i64, req: CreateNoteRequest) -> Result<Note> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            class_id: Set(req.class_id),
            title: Set(req.title),
            content: Set(req.content),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建笔记失败: {e}")))?;

        Ok(result.into_note())
    }

    /// 通过 ID 获取笔记
    pub async fn get_note_by_id_impl(&self, id: i64) -> Result<Option<Note>> {
        let result = Notes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询笔记失败: {e}")))?;

        Ok(result.map(|m| m.into_note()))
    }

    /// 列出用户笔记，最近更新的在前
    pub async fn list_user_notes_impl(&self, user_id: i64) -> Result<Vec<Note>> {
        let notes = Notes::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询用户笔记失败: {e}")))?;

        Ok(notes.into_iter().map(|m| m.into_note()).collect())
    }

    /// 更新笔记
    pub async fn update_note_impl(&self, id: i64, update: UpdateNoteRequest) -> Result<Option<Note>> {
        let existing = self.get_note_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(content) = update.content {
            model.content = Set(content);
        }

        if let Some(class_id) = update.class_id {
            model.class_id = Set(Some(class_id));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新笔记失败: {e}")))?;

        Ok(Some(result.into_note()))
    }
}
