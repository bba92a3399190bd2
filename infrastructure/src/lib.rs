//! Infrastructure layer for tiger-mate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod delay;
pub mod id;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAssistantConfig, FileConfig, FileReplConfig, FileTranscriptConfig,
};
pub use delay::FixedDelay;
pub use id::UuidIdGenerator;
pub use logging::JsonlTranscriptLogger;
