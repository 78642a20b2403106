//! 对象存储抽象
//!
//! 文件内容不落数据库，统一交给对象存储，库里只保留访问 URL。
//! 目前内置文件系统后端，换云端后端时只需新增实现。

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{LmsError, Result};

#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// 上传对象，返回可公开访问的 URL
    async fn put_object(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        content_type: &str,
    ) -> Result<String>;

    /// 按 URL 删除对象，对象不存在时不报错
    async fn delete_object(&self, url: &str) -> Result<()>;
}

/// 文件系统后端：对象写入本地目录，URL 为 base_url + 存储名
pub struct FsObjectStore {
    dir: PathBuf,
    base_url: String,
}

impl FsObjectStore {
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            dir: dir.into(),
            base_url,
        }
    }

    /// 存储名：uuid 前缀 + 清洗后的原始文件名，避免覆盖与路径穿越
    fn object_name(file_name: &str) -> String {
        let safe: String = file_name
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}_{}", uuid::Uuid::new_v4(), safe)
    }
}

#[async_trait::async_trait]
impl ObjectStore for FsObjectStore {
    async fn put_object(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        _content_type: &str,
    ) -> Result<String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| LmsError::object_store_operation(format!("创建存储目录失败: {e}")))?;

        let name = Self::object_name(file_name);
        let path = self.dir.join(&name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| LmsError::object_store_operation(format!("写入对象失败: {e}")))?;

        Ok(format!("{}{}", self.base_url, name))
    }

    async fn delete_object(&self, url: &str) -> Result<()> {
        let Some(name) = url.strip_prefix(self.base_url.as_str()) else {
            // 不是本存储签发的 URL，视为无事可做
            return Ok(());
        };

        // 存储名不含路径分隔符，拒绝可疑输入
        if name.contains('/') || name.contains("..") {
            return Err(LmsError::object_store_operation(format!(
                "非法对象名: {name}"
            )));
        }

        match tokio::fs::remove_file(self.dir.join(name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LmsError::object_store_operation(format!(
                "删除对象失败: {e}"
            ))),
        }
    }
}

pub fn create_object_store() -> Result<Arc<dyn ObjectStore>> {
    let config = AppConfig::get();
    match config.object_store.backend.as_str() {
        "fs" => Ok(Arc::new(FsObjectStore::new(
            &config.object_store.dir,
            &config.object_store.base_url,
        ))),
        other => Err(LmsError::object_store_operation(format!(
            "未知的对象存储后端: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> FsObjectStore {
        let dir = std::env::temp_dir().join(format!("lms-objstore-{}", uuid::Uuid::new_v4()));
        FsObjectStore::new(dir, "http://localhost:8000/files")
    }

    #[tokio::test]
    async fn put_then_delete_roundtrip() {
        let store = temp_store();
        let url = store
            .put_object(b"hello".to_vec(), "notes.pdf", "application/pdf")
            .await
            .unwrap();

        assert!(url.starts_with("http://localhost:8000/files/"));
        assert!(url.ends_with("_notes.pdf"));

        store.delete_object(&url).await.unwrap();
        // 二次删除幂等
        store.delete_object(&url).await.unwrap();
    }

    #[tokio::test]
    async fn object_name_sanitized() {
        let name = FsObjectStore::object_name("a b/c\\d.pdf");
        assert!(!name.contains('/'));
        assert!(!name.contains('\\'));
        assert!(!name.contains(' '));
        assert!(name.ends_with("a_b_c_d.pdf"));
    }

    #[tokio::test]
    async fn delete_foreign_url_is_noop() {
        let store = temp_store();
        store
            .delete_object("https://elsewhere.example/file.bin")
            .await
            .unwrap();
    }
}
