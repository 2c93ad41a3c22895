//! Voiceover Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::RecordedVoiceoversRepositoryPort;
use crate::application::repository_access::load_recorded;
use crate::application::queries::{
    GetContentVoiceoverStatus, GetRecordedVoiceovers, GetVoiceover, ListContentIds,
    ListContentIdsNeedingUpdate, ListOwners,
};
use crate::domain::voiceover::{RecordedVoiceoversDict, Voiceover};

// ============================================================================
// Response DTOs
// ============================================================================

/// 单条配音响应
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceoverResponse {
    pub content_id: String,
    pub language_code: String,
    pub filename: String,
    pub file_size_bytes: u64,
    pub file_size_mb: f64,
    pub needs_update: bool,
}

impl VoiceoverResponse {
    fn new(content_id: String, language_code: String, voiceover: &Voiceover) -> Self {
        Self {
            content_id,
            language_code,
            filename: voiceover.filename().to_string(),
            file_size_bytes: voiceover.file_size_bytes(),
            file_size_mb: voiceover.file_size_mb(),
            needs_update: voiceover.needs_update(),
        }
    }
}

/// content id 配音状态响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentVoiceoverStatusResponse {
    pub content_id: String,
    pub language_codes: Vec<String>,
    pub has_voiceovers: bool,
    pub has_unflagged_voiceovers: bool,
}

/// 单个 owner 需要更新的 content id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerUpdateReport {
    pub owner_id: String,
    pub content_ids: Vec<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetRecordedVoiceovers Handler
pub struct GetRecordedVoiceoversHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl GetRecordedVoiceoversHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(
        &self,
        query: GetRecordedVoiceovers,
    ) -> Result<RecordedVoiceoversDict, ApplicationError> {
        let recorded = load_recorded(self.repo.as_ref(), &query.owner_id).await?;
        Ok(recorded.to_backend_dict())
    }
}

/// ListContentIds Handler
pub struct ListContentIdsHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl ListContentIdsHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, query: ListContentIds) -> Result<Vec<String>, ApplicationError> {
        let recorded = load_recorded(self.repo.as_ref(), &query.owner_id).await?;
        Ok(recorded.all_content_ids())
    }
}

/// GetVoiceover Handler
pub struct GetVoiceoverHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl GetVoiceoverHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, query: GetVoiceover) -> Result<VoiceoverResponse, ApplicationError> {
        let recorded = load_recorded(self.repo.as_ref(), &query.owner_id).await?;
        let voiceover = recorded.voiceover(&query.content_id, &query.language_code)?;
        Ok(VoiceoverResponse::new(
            query.content_id,
            query.language_code,
            voiceover,
        ))
    }
}

/// GetContentVoiceoverStatus Handler
pub struct GetContentVoiceoverStatusHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl GetContentVoiceoverStatusHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(
        &self,
        query: GetContentVoiceoverStatus,
    ) -> Result<ContentVoiceoverStatusResponse, ApplicationError> {
        let recorded = load_recorded(self.repo.as_ref(), &query.owner_id).await?;
        let language_codes = recorded.voiceover_language_codes(&query.content_id)?;

        Ok(ContentVoiceoverStatusResponse {
            has_voiceovers: recorded.has_voiceovers(&query.content_id),
            has_unflagged_voiceovers: recorded.has_unflagged_voiceovers(&query.content_id),
            language_codes,
            content_id: query.content_id,
        })
    }
}

/// ListOwners Handler
pub struct ListOwnersHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl ListOwnersHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, _query: ListOwners) -> Result<Vec<String>, ApplicationError> {
        Ok(self.repo.find_all_owners().await?)
    }
}

/// ListContentIdsNeedingUpdate Handler
///
/// 按仓储的 owner 顺序返回每个 owner 的报告，没有待更新配音的 owner 也包含在内
pub struct ListContentIdsNeedingUpdateHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl ListContentIdsNeedingUpdateHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(
        &self,
        _query: ListContentIdsNeedingUpdate,
    ) -> Result<Vec<OwnerUpdateReport>, ApplicationError> {
        let owners = self.repo.find_all_owners().await?;
        let mut reports = Vec::with_capacity(owners.len());
        for owner_id in owners {
            let recorded = load_recorded(self.repo.as_ref(), &owner_id).await?;
            reports.push(OwnerUpdateReport {
                content_ids: recorded.content_ids_needing_update(),
                owner_id,
            });
        }
        Ok(reports)
    }
}
