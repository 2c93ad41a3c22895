//! Voiceover Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoiceoverError {
    #[error("Unable to find the given content id: {0}")]
    ContentIdNotFound(String),

    #[error("Unable to find language code {language_code} for content id {content_id}")]
    LanguageCodeNotFound {
        content_id: String,
        language_code: String,
    },

    #[error("Trying to add duplicate content id: {0}")]
    DuplicateContentId(String),

    #[error("Trying to add duplicate language code {language_code} for content id {content_id}")]
    DuplicateLanguageCode {
        content_id: String,
        language_code: String,
    },

    #[error("Invalid voiceover: {0}")]
    InvalidVoiceover(String),
}

impl VoiceoverError {
    pub(crate) fn language_code_not_found(content_id: &str, language_code: &str) -> Self {
        Self::LanguageCodeNotFound {
            content_id: content_id.to_string(),
            language_code: language_code.to_string(),
        }
    }

    /// content id 或 language code 不存在
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ContentIdNotFound(_) | Self::LanguageCodeNotFound { .. }
        )
    }

    /// 重复添加 content id 或 language code
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicateContentId(_) | Self::DuplicateLanguageCode { .. }
        )
    }
}
