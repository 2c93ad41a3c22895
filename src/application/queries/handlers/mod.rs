//! Query Handlers 实现

mod voiceover_handlers;

pub use voiceover_handlers::*;
