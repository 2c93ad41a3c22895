//! Memory Layer - In-Memory Repository
//!
//! 测试与嵌入场景使用的内存仓储

mod voiceover_repository;

pub use voiceover_repository::InMemoryVoiceoverRepository;
