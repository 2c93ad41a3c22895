//! Voiceover Context - Aggregate Root

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{
    BindableVoiceovers, LanguageVoiceoverDicts, RecordedVoiceoversDict, Voiceover,
    VoiceoverError,
};

/// language code -> 配音
pub type LanguageVoiceovers = IndexMap<String, Voiceover>;

/// RecordedVoiceovers 聚合根
///
/// 不变量:
/// - content id 唯一，按插入顺序枚举
/// - 同一 content id 下 language code 唯一，按插入顺序枚举
/// - content id 可以没有任何配音（与 content id 不存在不同）
/// - 任何变更要么完整生效，要么在修改前返回错误
///
/// `==` 只比较内容，不比较键顺序（`IndexMap` 的相等语义）；
/// 需要比较顺序时使用 `all_content_ids` / `voiceover_language_codes` 或序列化结果。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordedVoiceoversDict", into = "RecordedVoiceoversDict")]
pub struct RecordedVoiceovers {
    voiceovers_mapping: IndexMap<String, LanguageVoiceovers>,
}

impl RecordedVoiceovers {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从后端字典构建，保留两层键的顺序
    pub fn from_backend_dict(dict: RecordedVoiceoversDict) -> Result<Self, VoiceoverError> {
        let mut voiceovers_mapping = IndexMap::with_capacity(dict.voiceovers_mapping.len());
        for (content_id, language_dicts) in dict.voiceovers_mapping {
            let mut voiceovers = IndexMap::with_capacity(language_dicts.len());
            for (language_code, voiceover_dict) in language_dicts {
                voiceovers.insert(language_code, Voiceover::from_dict(voiceover_dict)?);
            }
            voiceovers_mapping.insert(content_id, voiceovers);
        }
        Ok(Self { voiceovers_mapping })
    }

    pub fn to_backend_dict(&self) -> RecordedVoiceoversDict {
        let voiceovers_mapping = self
            .voiceovers_mapping
            .iter()
            .map(|(content_id, voiceovers)| {
                let language_dicts: LanguageVoiceoverDicts = voiceovers
                    .iter()
                    .map(|(language_code, voiceover)| (language_code.clone(), voiceover.to_dict()))
                    .collect();
                (content_id.clone(), language_dicts)
            })
            .collect();
        RecordedVoiceoversDict { voiceovers_mapping }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_backend_dict())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn all_content_ids(&self) -> Vec<String> {
        self.voiceovers_mapping.keys().cloned().collect()
    }

    pub fn voiceover_language_codes(&self, content_id: &str) -> Result<Vec<String>, VoiceoverError> {
        Ok(self.language_voiceovers(content_id)?.keys().cloned().collect())
    }

    /// content id 下的配音映射（只读）
    pub fn bindable_voiceovers(&self, content_id: &str) -> Result<&LanguageVoiceovers, VoiceoverError> {
        self.language_voiceovers(content_id)
    }

    /// content id 下配音映射的实时视图
    ///
    /// 返回的是聚合内部存储的别名而非副本：经由视图修改的标记立即对聚合可见。
    pub fn bindable_voiceovers_mut(
        &mut self,
        content_id: &str,
    ) -> Result<BindableVoiceovers<'_>, VoiceoverError> {
        Ok(BindableVoiceovers::new(self.language_voiceovers_mut(content_id)?))
    }

    pub fn voiceover(&self, content_id: &str, language_code: &str) -> Result<&Voiceover, VoiceoverError> {
        self.language_voiceovers(content_id)?
            .get(language_code)
            .ok_or_else(|| VoiceoverError::language_code_not_found(content_id, language_code))
    }

    /// content id 存在且至少有一条配音
    pub fn has_voiceovers(&self, content_id: &str) -> bool {
        self.voiceovers_mapping
            .get(content_id)
            .is_some_and(|voiceovers| !voiceovers.is_empty())
    }

    /// content id 存在且至少有一条配音不需要更新
    ///
    /// 没有配音时返回 false
    pub fn has_unflagged_voiceovers(&self, content_id: &str) -> bool {
        self.voiceovers_mapping
            .get(content_id)
            .is_some_and(|voiceovers| voiceovers.values().any(|v| !v.needs_update()))
    }

    /// 至少有一条配音需要更新的 content id，按插入顺序
    pub fn content_ids_needing_update(&self) -> Vec<String> {
        self.voiceovers_mapping
            .iter()
            .filter(|(_, voiceovers)| voiceovers.values().any(Voiceover::needs_update))
            .map(|(content_id, _)| content_id.clone())
            .collect()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    pub fn add_content_id(&mut self, content_id: impl Into<String>) -> Result<(), VoiceoverError> {
        let content_id = content_id.into();
        if self.voiceovers_mapping.contains_key(&content_id) {
            return Err(VoiceoverError::DuplicateContentId(content_id));
        }
        self.voiceovers_mapping.insert(content_id, IndexMap::new());
        Ok(())
    }

    /// 删除 content id，其余键顺序不变
    pub fn delete_content_id(&mut self, content_id: &str) -> Result<(), VoiceoverError> {
        self.voiceovers_mapping
            .shift_remove(content_id)
            .map(|_| ())
            .ok_or_else(|| VoiceoverError::ContentIdNotFound(content_id.to_string()))
    }

    pub fn add_voiceover(
        &mut self,
        content_id: &str,
        language_code: impl Into<String>,
        filename: impl Into<String>,
        file_size_bytes: u64,
    ) -> Result<(), VoiceoverError> {
        let language_code = language_code.into();
        let voiceovers = self.language_voiceovers_mut(content_id)?;
        if voiceovers.contains_key(&language_code) {
            return Err(VoiceoverError::DuplicateLanguageCode {
                content_id: content_id.to_string(),
                language_code,
            });
        }
        let voiceover = Voiceover::create_new(filename, file_size_bytes)?;
        voiceovers.insert(language_code, voiceover);
        Ok(())
    }

    pub fn delete_voiceover(&mut self, content_id: &str, language_code: &str) -> Result<(), VoiceoverError> {
        self.language_voiceovers_mut(content_id)?
            .shift_remove(language_code)
            .map(|_| ())
            .ok_or_else(|| VoiceoverError::language_code_not_found(content_id, language_code))
    }

    pub fn mark_all_voiceovers_as_needing_update(&mut self, content_id: &str) -> Result<(), VoiceoverError> {
        self.language_voiceovers_mut(content_id)?
            .values_mut()
            .for_each(Voiceover::mark_as_needing_update);
        Ok(())
    }

    pub fn toggle_needs_update_attribute(
        &mut self,
        content_id: &str,
        language_code: &str,
    ) -> Result<(), VoiceoverError> {
        self.language_voiceovers_mut(content_id)?
            .get_mut(language_code)
            .ok_or_else(|| VoiceoverError::language_code_not_found(content_id, language_code))?
            .toggle_needs_update();
        Ok(())
    }

    fn language_voiceovers(&self, content_id: &str) -> Result<&LanguageVoiceovers, VoiceoverError> {
        self.voiceovers_mapping
            .get(content_id)
            .ok_or_else(|| VoiceoverError::ContentIdNotFound(content_id.to_string()))
    }

    fn language_voiceovers_mut(
        &mut self,
        content_id: &str,
    ) -> Result<&mut LanguageVoiceovers, VoiceoverError> {
        self.voiceovers_mapping
            .get_mut(content_id)
            .ok_or_else(|| VoiceoverError::ContentIdNotFound(content_id.to_string()))
    }
}

impl TryFrom<RecordedVoiceoversDict> for RecordedVoiceovers {
    type Error = VoiceoverError;

    fn try_from(dict: RecordedVoiceoversDict) -> Result<Self, Self::Error> {
        Self::from_backend_dict(dict)
    }
}

impl From<RecordedVoiceovers> for RecordedVoiceoversDict {
    fn from(recorded: RecordedVoiceovers) -> Self {
        recorded.to_backend_dict()
    }
}
