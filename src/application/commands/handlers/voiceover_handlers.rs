//! Voiceover Command Handlers
//!
//! 每个 handler: 加载聚合 -> 执行领域操作 -> 保存。
//! 领域操作失败时直接返回，仓储中的数据保持不变。

use std::sync::Arc;

use crate::application::commands::{
    AddContentId, AddVoiceover, DeleteContentId, DeleteVoiceover, ImportRecordedVoiceovers,
    MarkVoiceoversNeedingUpdate, ToggleNeedsUpdate,
};
use crate::application::error::ApplicationError;
use crate::application::ports::RecordedVoiceoversRepositoryPort;
use crate::application::repository_access::load_recorded;
use crate::domain::voiceover::RecordedVoiceovers;

// ============================================================================
// ImportRecordedVoiceovers
// ============================================================================

/// 导入响应
#[derive(Debug, Clone)]
pub struct ImportRecordedVoiceoversResponse {
    pub owner_id: String,
    pub content_id_count: usize,
}

/// ImportRecordedVoiceovers Handler
pub struct ImportRecordedVoiceoversHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl ImportRecordedVoiceoversHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(
        &self,
        command: ImportRecordedVoiceovers,
    ) -> Result<ImportRecordedVoiceoversResponse, ApplicationError> {
        let recorded = RecordedVoiceovers::from_backend_dict(command.dict)?;
        self.repo.save(&command.owner_id, &recorded).await?;

        let content_id_count = recorded.all_content_ids().len();
        tracing::info!(
            owner_id = %command.owner_id,
            content_ids = content_id_count,
            "Recorded voiceovers imported"
        );

        Ok(ImportRecordedVoiceoversResponse {
            owner_id: command.owner_id,
            content_id_count,
        })
    }
}

// ============================================================================
// AddContentId / DeleteContentId
// ============================================================================

/// AddContentId Handler
pub struct AddContentIdHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl AddContentIdHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, command: AddContentId) -> Result<(), ApplicationError> {
        let mut recorded = load_recorded(self.repo.as_ref(), &command.owner_id).await?;
        recorded.add_content_id(command.content_id.clone())?;
        self.repo.save(&command.owner_id, &recorded).await?;

        tracing::info!(
            owner_id = %command.owner_id,
            content_id = %command.content_id,
            "Content id added"
        );
        Ok(())
    }
}

/// DeleteContentId Handler
pub struct DeleteContentIdHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl DeleteContentIdHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, command: DeleteContentId) -> Result<(), ApplicationError> {
        let mut recorded = load_recorded(self.repo.as_ref(), &command.owner_id).await?;
        recorded.delete_content_id(&command.content_id)?;
        self.repo.save(&command.owner_id, &recorded).await?;

        tracing::info!(
            owner_id = %command.owner_id,
            content_id = %command.content_id,
            "Content id deleted"
        );
        Ok(())
    }
}

// ============================================================================
// AddVoiceover / DeleteVoiceover
// ============================================================================

/// AddVoiceover Handler
pub struct AddVoiceoverHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl AddVoiceoverHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, command: AddVoiceover) -> Result<(), ApplicationError> {
        let mut recorded = load_recorded(self.repo.as_ref(), &command.owner_id).await?;
        recorded.add_voiceover(
            &command.content_id,
            command.language_code.clone(),
            command.filename.clone(),
            command.file_size_bytes,
        )?;
        self.repo.save(&command.owner_id, &recorded).await?;

        tracing::info!(
            owner_id = %command.owner_id,
            content_id = %command.content_id,
            language_code = %command.language_code,
            filename = %command.filename,
            file_size_bytes = command.file_size_bytes,
            "Voiceover added"
        );
        Ok(())
    }
}

/// DeleteVoiceover Handler
pub struct DeleteVoiceoverHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl DeleteVoiceoverHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, command: DeleteVoiceover) -> Result<(), ApplicationError> {
        let mut recorded = load_recorded(self.repo.as_ref(), &command.owner_id).await?;
        recorded.delete_voiceover(&command.content_id, &command.language_code)?;
        self.repo.save(&command.owner_id, &recorded).await?;

        tracing::info!(
            owner_id = %command.owner_id,
            content_id = %command.content_id,
            language_code = %command.language_code,
            "Voiceover deleted"
        );
        Ok(())
    }
}

// ============================================================================
// MarkVoiceoversNeedingUpdate / ToggleNeedsUpdate
// ============================================================================

/// MarkVoiceoversNeedingUpdate Handler
pub struct MarkVoiceoversNeedingUpdateHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl MarkVoiceoversNeedingUpdateHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, command: MarkVoiceoversNeedingUpdate) -> Result<(), ApplicationError> {
        let mut recorded = load_recorded(self.repo.as_ref(), &command.owner_id).await?;
        recorded.mark_all_voiceovers_as_needing_update(&command.content_id)?;
        self.repo.save(&command.owner_id, &recorded).await?;

        tracing::info!(
            owner_id = %command.owner_id,
            content_id = %command.content_id,
            "Voiceovers marked as needing update"
        );
        Ok(())
    }
}

/// ToggleNeedsUpdate 响应
#[derive(Debug, Clone)]
pub struct ToggleNeedsUpdateResponse {
    pub needs_update: bool,
}

/// ToggleNeedsUpdate Handler
pub struct ToggleNeedsUpdateHandler {
    repo: Arc<dyn RecordedVoiceoversRepositoryPort>,
}

impl ToggleNeedsUpdateHandler {
    pub fn new(repo: Arc<dyn RecordedVoiceoversRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn handle(
        &self,
        command: ToggleNeedsUpdate,
    ) -> Result<ToggleNeedsUpdateResponse, ApplicationError> {
        let mut recorded = load_recorded(self.repo.as_ref(), &command.owner_id).await?;
        recorded.toggle_needs_update_attribute(&command.content_id, &command.language_code)?;
        let needs_update = recorded
            .voiceover(&command.content_id, &command.language_code)?
            .needs_update();
        self.repo.save(&command.owner_id, &recorded).await?;

        tracing::debug!(
            owner_id = %command.owner_id,
            content_id = %command.content_id,
            language_code = %command.language_code,
            needs_update,
            "Voiceover needs_update toggled"
        );
        Ok(ToggleNeedsUpdateResponse { needs_update })
    }
}
