//! 课程资料存储操作

use super::SeaOrmStorage;
use crate::entity::materials::{ActiveModel, Column, Entity as Materials};
use crate::errors::{LmsError, Result};
use crate::models::materials::entities::{Material, NewMaterial};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 登记资料。文件本体此前已写入对象存储，这里只存元数据
    pub async fn create_material_impl(&self, material: NewMaterial) -> Result<Material> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(material.class_id),
            title: Set(material.title),
            description: Set(material.description),
            file_url: Set(material.file_url),
            file_type: Set(material.file_type),
            file_size: Set(material.file_size),
            uploaded_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("登记课程资料失败: {e}")))?;

        Ok(result.into_material())
    }

    /// 通过 ID 获取资料
    pub async fn get_material_by_id_impl(&self, id: i64) -> Result<Option<Material>> {
        let result = Materials::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程资料失败: {e}")))?;

        Ok(result.map(|m| m.into_material()))
    }

    /// 列出班级资料，按上传时间倒序
    pub async fn list_class_materials_impl(&self, class_id: i64) -> Result<Vec<Material>> {
        let materials = Materials::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::UploadedAt)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询班级资料失败: {e}")))?;

        Ok(materials.into_iter().map(|m| m.into_material()).collect())
    }
}
