//! Voiceover Commands

use crate::domain::voiceover::RecordedVoiceoversDict;

/// 导入（覆盖）owner 的配音后端字典
#[derive(Debug, Clone)]
pub struct ImportRecordedVoiceovers {
    pub owner_id: String,
    pub dict: RecordedVoiceoversDict,
}

/// 添加 content id 命令
#[derive(Debug, Clone)]
pub struct AddContentId {
    pub owner_id: String,
    pub content_id: String,
}

/// 删除 content id 命令
#[derive(Debug, Clone)]
pub struct DeleteContentId {
    pub owner_id: String,
    pub content_id: String,
}

/// 添加配音命令
#[derive(Debug, Clone)]
pub struct AddVoiceover {
    pub owner_id: String,
    pub content_id: String,
    pub language_code: String,
    pub filename: String,
    pub file_size_bytes: u64,
}

/// 删除配音命令
#[derive(Debug, Clone)]
pub struct DeleteVoiceover {
    pub owner_id: String,
    pub content_id: String,
    pub language_code: String,
}

/// 源文本变更后，将 content id 下所有配音标记为需要更新
#[derive(Debug, Clone)]
pub struct MarkVoiceoversNeedingUpdate {
    pub owner_id: String,
    pub content_id: String,
}

/// 切换单条配音的 needs_update 标记
#[derive(Debug, Clone)]
pub struct ToggleNeedsUpdate {
    pub owner_id: String,
    pub content_id: String,
    pub language_code: String,
}
