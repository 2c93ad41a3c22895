//! Voiceover Context - 配音元数据限界上下文
//!
//! 职责:
//! - 按 content id / language code 管理录制好的配音
//! - needs_update 标记的传播与切换
//! - 与后端字典格式的双向转换

mod aggregate;
mod backend_dict;
mod errors;
mod value_objects;

pub use aggregate::{LanguageVoiceovers, RecordedVoiceovers};
pub use backend_dict::{LanguageVoiceoverDicts, RecordedVoiceoversDict, VoiceoverDict};
pub use errors::VoiceoverError;
pub use value_objects::{BindableVoiceovers, Voiceover};
