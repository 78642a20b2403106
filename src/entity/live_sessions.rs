//! 直播课实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "live_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_start: i64,
    pub scheduled_end: i64,
    pub meeting_url: Option<String>,
    pub meeting_id: Option<String>,
    pub is_recorded: bool,
    pub recording_url: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_live_session(self) -> crate::models::sessions::entities::LiveSession {
        use crate::models::sessions::entities::LiveSession;
        use chrono::{DateTime, Utc};

        LiveSession {
            id: self.id,
            class_id: self.class_id,
            title: self.title,
            description: self.description,
            scheduled_start: DateTime::<Utc>::from_timestamp(self.scheduled_start, 0)
                .unwrap_or_default(),
            scheduled_end: DateTime::<Utc>::from_timestamp(self.scheduled_end, 0)
                .unwrap_or_default(),
            meeting_url: self.meeting_url,
            meeting_id: self.meeting_id,
            is_recorded: self.is_recorded,
            recording_url: self.recording_url,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
