//! In-Memory RecordedVoiceovers Repository

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::application::ports::{RecordedVoiceoversRepositoryPort, RepositoryError};
use crate::domain::voiceover::RecordedVoiceovers;

/// 内存配音仓储
///
/// owner id 按插入顺序列出
pub struct InMemoryVoiceoverRepository {
    entries: DashMap<String, (u64, RecordedVoiceovers)>,
    next_seq: AtomicU64,
}

impl InMemoryVoiceoverRepository {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }
}

impl Default for InMemoryVoiceoverRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordedVoiceoversRepositoryPort for InMemoryVoiceoverRepository {
    async fn save(
        &self,
        owner_id: &str,
        recorded: &RecordedVoiceovers,
    ) -> Result<(), RepositoryError> {
        let seq = match self.entries.get(owner_id) {
            Some(entry) => entry.0,
            None => self.next_seq.fetch_add(1, Ordering::Relaxed),
        };
        self.entries.insert(owner_id.to_string(), (seq, recorded.clone()));
        tracing::debug!(owner_id = %owner_id, "Recorded voiceovers saved");
        Ok(())
    }

    async fn find_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<Option<RecordedVoiceovers>, RepositoryError> {
        Ok(self.entries.get(owner_id).map(|entry| entry.1.clone()))
    }

    async fn find_all_owners(&self) -> Result<Vec<String>, RepositoryError> {
        let mut owners: Vec<(u64, String)> = self
            .entries
            .iter()
            .map(|entry| (entry.value().0, entry.key().clone()))
            .collect();
        owners.sort_by_key(|(seq, _)| *seq);
        Ok(owners.into_iter().map(|(_, owner_id)| owner_id).collect())
    }

    async fn delete(&self, owner_id: &str) -> Result<(), RepositoryError> {
        self.entries
            .remove(owner_id)
            .map(|_| {
                tracing::debug!(owner_id = %owner_id, "Recorded voiceovers deleted");
            })
            .ok_or_else(|| RepositoryError::NotFound(owner_id.to_string()))
    }
}
