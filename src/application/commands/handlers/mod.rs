//! Command Handlers 实现

mod voiceover_handlers;

pub use voiceover_handlers::{
    AddContentIdHandler, AddVoiceoverHandler, DeleteContentIdHandler, DeleteVoiceoverHandler,
    ImportRecordedVoiceoversHandler, ImportRecordedVoiceoversResponse,
    MarkVoiceoversNeedingUpdateHandler, ToggleNeedsUpdateHandler, ToggleNeedsUpdateResponse,
};
