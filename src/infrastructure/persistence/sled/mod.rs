//! Sled 嵌入式存储

mod voiceover_store;

pub use voiceover_store::{SledStoreConfig, SledVoiceoverRepository};
