//! Repository Ports - 出站端口
//!
//! 定义配音元数据持久化的抽象接口
//! 具体实现在 infrastructure 层（内存 / Sled）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::voiceover::RecordedVoiceovers;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// RecordedVoiceovers Repository Port
///
/// owner id 标识持有配音的内容（如某个 exploration state 或 question）
#[async_trait]
pub trait RecordedVoiceoversRepositoryPort: Send + Sync {
    /// 保存（覆盖）owner 的配音
    async fn save(
        &self,
        owner_id: &str,
        recorded: &RecordedVoiceovers,
    ) -> Result<(), RepositoryError>;

    /// 根据 owner id 查找配音
    async fn find_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<Option<RecordedVoiceovers>, RepositoryError>;

    /// 获取所有 owner id
    async fn find_all_owners(&self) -> Result<Vec<String>, RepositoryError>;

    /// 删除 owner 的配音
    async fn delete(&self, owner_id: &str) -> Result<(), RepositoryError>;
}
