//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{FileAssistantConfig, FileConfig, FileReplConfig, FileTranscriptConfig};
pub use loader::ConfigLoader;
