//! voxmap - 结构化教学内容的配音元数据
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voiceover Context: 按 content id / language code 管理录制好的配音
//!
//! 应用层 (application/):
//! - Ports: RecordedVoiceoversRepositoryPort
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - Memory: 内存仓储
//! - Persistence: Sled 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::voiceover::{RecordedVoiceovers, Voiceover, VoiceoverError};
