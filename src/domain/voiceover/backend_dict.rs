//! Voiceover Context - 后端字典格式
//!
//! 与持久化/传输层交换的 JSON 结构:
//!
//! ```json
//! {
//!   "voiceovers_mapping": {
//!     "content": {
//!       "en": { "filename": "a.mp3", "file_size_bytes": 1000, "needs_update": false }
//!     },
//!     "hint_1": {}
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 单条配音的字典形式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceoverDict {
    pub filename: String,
    pub file_size_bytes: u64,
    pub needs_update: bool,
}

/// language code -> 配音字典
pub type LanguageVoiceoverDicts = IndexMap<String, VoiceoverDict>;

/// RecordedVoiceovers 的字典形式
///
/// 两层映射均保留插入顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedVoiceoversDict {
    pub voiceovers_mapping: IndexMap<String, LanguageVoiceoverDicts>,
}
