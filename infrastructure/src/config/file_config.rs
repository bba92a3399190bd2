//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; translation into application-layer
//! parameters happens in the CLI wiring.

use mate_application::SessionParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Assistant behavior settings
    pub assistant: FileAssistantConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript logging settings
    pub transcript: FileTranscriptConfig,
}

/// Assistant configuration from TOML (`[assistant]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    /// Simulated response latency in milliseconds
    pub response_delay_ms: u64,
}

impl Default for FileAssistantConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: 800,
        }
    }
}

impl FileAssistantConfig {
    /// Translate into application-layer session parameters
    pub fn session_params(&self) -> SessionParams {
        SessionParams::default()
            .with_response_delay(Duration::from_millis(self.response_delay_ms))
    }
}

/// REPL configuration from TOML (`[repl]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the typing indicator while a turn is in flight
    pub show_typing: bool,
    /// Path to the readline history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_typing: true,
            history_file: None,
        }
    }
}

/// Transcript configuration from TOML (`[transcript]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptConfig {
    /// Write a JSONL transcript of each session
    pub enabled: bool,
    /// Transcript file path; defaults under the platform data dir
    pub path: Option<String>,
}

impl Default for FileTranscriptConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.assistant.response_delay_ms, 800);
        assert!(config.repl.show_typing);
        assert!(!config.transcript.enabled);
        assert!(config.transcript.path.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [assistant]
            response_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.assistant.response_delay_ms, 0);
        assert!(config.repl.show_typing);
    }

    #[test]
    fn test_session_params_translation() {
        let config: FileConfig = toml::from_str(
            r#"
            [assistant]
            response_delay_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(
            config.assistant.session_params().response_delay,
            Duration::from_millis(250)
        );
    }
}
