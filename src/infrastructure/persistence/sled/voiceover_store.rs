//! Sled-based RecordedVoiceovers Repository
//!
//! 每个 owner 一条记录: key = owner id, value = JSON 后端字典

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{RecordedVoiceoversRepositoryPort, RepositoryError};
use crate::domain::voiceover::{RecordedVoiceovers, RecordedVoiceoversDict};

const TREE_NAME: &str = "recorded_voiceovers";

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
}

/// Sled 配音仓储
///
/// owner id 按字节序列出
pub struct SledVoiceoverRepository {
    tree: ::sled::Tree,
}

impl SledVoiceoverRepository {
    pub fn new(config: &SledStoreConfig) -> Result<Self, RepositoryError> {
        let db = ::sled::open(&config.db_path)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        let tree = db
            .open_tree(TREE_NAME)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            owners = tree.len(),
            "SledVoiceoverRepository initialized"
        );

        Ok(Self { tree })
    }

    /// 打开现有存储
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let config = SledStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 刷新数据库
    pub fn flush(&self) -> Result<(), RepositoryError> {
        self.tree
            .flush()
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    fn decode(owner_id: &str, bytes: &[u8]) -> Result<RecordedVoiceovers, RepositoryError> {
        let dict: RecordedVoiceoversDict = serde_json::from_slice(bytes)
            .map_err(|e| RepositoryError::SerializationError(format!("{owner_id}: {e}")))?;
        RecordedVoiceovers::from_backend_dict(dict)
            .map_err(|e| RepositoryError::SerializationError(format!("{owner_id}: {e}")))
    }
}

#[async_trait]
impl RecordedVoiceoversRepositoryPort for SledVoiceoverRepository {
    async fn save(
        &self,
        owner_id: &str,
        recorded: &RecordedVoiceovers,
    ) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec(&recorded.to_backend_dict())
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        self.tree
            .insert(owner_id.as_bytes(), bytes)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        tracing::debug!(owner_id = %owner_id, "Recorded voiceovers saved");
        Ok(())
    }

    async fn find_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<Option<RecordedVoiceovers>, RepositoryError> {
        let value = self
            .tree
            .get(owner_id.as_bytes())
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        value
            .map(|bytes| Self::decode(owner_id, &bytes))
            .transpose()
    }

    async fn find_all_owners(&self) -> Result<Vec<String>, RepositoryError> {
        let mut owners = Vec::new();
        for key in self.tree.iter().keys() {
            let key = key.map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
            let owner_id = String::from_utf8(key.to_vec())
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
            owners.push(owner_id);
        }
        Ok(owners)
    }

    async fn delete(&self, owner_id: &str) -> Result<(), RepositoryError> {
        let removed = self
            .tree
            .remove(owner_id.as_bytes())
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if removed.is_none() {
            return Err(RepositoryError::NotFound(owner_id.to_string()));
        }
        tracing::debug!(owner_id = %owner_id, "Recorded voiceovers deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_store_round_trip() {
        let dir = tempdir().unwrap();
        let repo = SledVoiceoverRepository::open(dir.path().join("test.sled")).unwrap();

        let mut recorded = RecordedVoiceovers::new();
        recorded.add_content_id("solution").unwrap();
        recorded.add_content_id("content").unwrap();
        recorded.add_voiceover("content", "hi", "filename2.mp3", 11000).unwrap();
        recorded.add_voiceover("content", "en", "filename1.mp3", 100000).unwrap();
        recorded.toggle_needs_update_attribute("content", "en").unwrap();

        repo.save("exp_1.Introduction", &recorded).await.unwrap();

        let loaded = repo.find_by_owner("exp_1.Introduction").await.unwrap().unwrap();
        assert_eq!(loaded.to_backend_dict(), recorded.to_backend_dict());
        assert_eq!(loaded.all_content_ids(), vec!["solution", "content"]);
        assert_eq!(loaded.voiceover_language_codes("content").unwrap(), vec!["hi", "en"]);
        assert!(loaded.voiceover("content", "en").unwrap().needs_update());
    }

    #[tokio::test]
    async fn test_owners_and_delete() {
        let dir = tempdir().unwrap();
        let repo = SledVoiceoverRepository::open(dir.path().join("test.sled")).unwrap();
        let recorded = RecordedVoiceovers::new();

        repo.save("question_2", &recorded).await.unwrap();
        repo.save("question_1", &recorded).await.unwrap();
        assert_eq!(
            repo.find_all_owners().await.unwrap(),
            vec!["question_1", "question_2"]
        );

        repo.delete("question_1").await.unwrap();
        assert!(repo.find_by_owner("question_1").await.unwrap().is_none());
        assert!(matches!(
            repo.delete("question_1").await.unwrap_err(),
            RepositoryError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_serialization_error() {
        let dir = tempdir().unwrap();
        let repo = SledVoiceoverRepository::open(dir.path().join("test.sled")).unwrap();
        repo.tree.insert("broken", b"not json".to_vec()).unwrap();

        let err = repo.find_by_owner("broken").await.unwrap_err();
        assert!(matches!(err, RepositoryError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_stored_value_is_backend_dict() {
        let dir = tempdir().unwrap();
        let repo = SledVoiceoverRepository::open(dir.path().join("test.sled")).unwrap();

        let mut recorded = RecordedVoiceovers::new();
        recorded.add_content_id("content").unwrap();
        recorded.add_voiceover("content", "en", "filename1.mp3", 100000).unwrap();
        repo.save("question_1", &recorded).await.unwrap();

        let bytes = repo.tree.get("question_1").unwrap().unwrap();
        let stored: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            stored,
            serde_json::json!({
                "voiceovers_mapping": {
                    "content": {
                        "en": {"filename": "filename1.mp3", "file_size_bytes": 100000, "needs_update": false}
                    }
                }
            })
        );
    }
}
