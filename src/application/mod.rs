//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（RecordedVoiceoversRepositoryPort）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
mod repository_access;

// Re-exports
pub use commands::{
    AddContentId,
    AddVoiceover,
    DeleteContentId,
    DeleteVoiceover,
    ImportRecordedVoiceovers,
    MarkVoiceoversNeedingUpdate,
    ToggleNeedsUpdate,
    // Handlers
    handlers::{
        AddContentIdHandler, AddVoiceoverHandler, DeleteContentIdHandler, DeleteVoiceoverHandler,
        ImportRecordedVoiceoversHandler, ImportRecordedVoiceoversResponse,
        MarkVoiceoversNeedingUpdateHandler, ToggleNeedsUpdateHandler, ToggleNeedsUpdateResponse,
    },
};

pub use error::ApplicationError;

pub use ports::{RecordedVoiceoversRepositoryPort, RepositoryError};

pub use queries::{
    GetContentVoiceoverStatus,
    GetRecordedVoiceovers,
    GetVoiceover,
    ListContentIds,
    ListContentIdsNeedingUpdate,
    ListOwners,
    // Handlers
    handlers::{
        ContentVoiceoverStatusResponse, GetContentVoiceoverStatusHandler,
        GetRecordedVoiceoversHandler, GetVoiceoverHandler, ListContentIdsHandler,
        ListContentIdsNeedingUpdateHandler, ListOwnersHandler, OwnerUpdateReport,
        VoiceoverResponse,
    },
};
