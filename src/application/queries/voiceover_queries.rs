//! Voiceover Queries

/// 获取 owner 的完整配音（后端字典形式）
#[derive(Debug, Clone)]
pub struct GetRecordedVoiceovers {
    pub owner_id: String,
}

/// 列出 owner 的所有 content id
#[derive(Debug, Clone)]
pub struct ListContentIds {
    pub owner_id: String,
}

/// 获取单条配音
#[derive(Debug, Clone)]
pub struct GetVoiceover {
    pub owner_id: String,
    pub content_id: String,
    pub language_code: String,
}

/// 获取 content id 的配音状态
#[derive(Debug, Clone)]
pub struct GetContentVoiceoverStatus {
    pub owner_id: String,
    pub content_id: String,
}

/// 列出所有 owner
#[derive(Debug, Clone)]
pub struct ListOwners;

/// 列出每个 owner 中需要重新录制的 content id
#[derive(Debug, Clone)]
pub struct ListContentIdsNeedingUpdate;
