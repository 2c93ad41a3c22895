//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Voiceover Context: 配音元数据管理

pub mod voiceover;
