//! # Translator Configuration
//!
//! Immutable settings handed to [`crate::translator::Translator`] at
//! construction time. Loadable from TOML:
//!
//! ```toml
//! max_depth = 1
//! user_content_markers = ["/Game/", "/Content/"]
//! collect_user_types = true
//!
//! [output]
//! pretty = false
//! indent = 2
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deepest subgraph recursion the translator will honour.
pub const MAX_TRANSLATION_DEPTH: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// How many levels of called/collapsed subgraphs to translate. 0 disables recursion.
    pub max_depth: u8,

    /// Path fragments identifying user-authored programs, structs and enums.
    pub user_content_markers: Vec<String>,

    /// Collect user-defined struct and enum definitions into the IR.
    pub collect_user_types: bool,

    pub output: OutputConfig,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            max_depth: 0,
            user_content_markers: vec!["/Game/".to_string(), "/Content/".to_string()],
            collect_user_types: true,
            output: OutputConfig::default(),
        }
    }
}

/// Text style the pipeline serializes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 4,
        }
    }
}

impl TranslatorConfig {
    /// Parse a config from TOML text, clamping out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        Ok(config.clamped())
    }

    /// Load a config file from disk.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a TOML file
    ///
    /// # Returns
    ///
    /// * `Ok(TranslatorConfig)` - The parsed settings
    /// * `Err(ConfigError)` - If the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!("[PBIR] Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self.clamped()
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// True if `path` lives under one of the user content markers.
    pub fn is_user_path(&self, path: &str) -> bool {
        self.user_content_markers
            .iter()
            .any(|marker| !marker.is_empty() && path.contains(marker.as_str()))
    }

    fn clamped(mut self) -> Self {
        if self.max_depth > MAX_TRANSLATION_DEPTH {
            tracing::warn!(
                "[PBIR] max_depth {} exceeds limit, clamping to {}",
                self.max_depth,
                MAX_TRANSLATION_DEPTH
            );
            self.max_depth = MAX_TRANSLATION_DEPTH;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_recursion() {
        let config = TranslatorConfig::default();
        assert_eq!(config.max_depth, 0);
        assert!(config.is_user_path("/Game/Blueprints/BP_Door"));
        assert!(!config.is_user_path("/Script/Engine"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config =
            TranslatorConfig::from_toml_str("max_depth = 2\n[output]\npretty = false\n").unwrap();
        assert_eq!(config.max_depth, 2);
        assert!(!config.output.pretty);
        assert_eq!(config.output.indent, 4);
        assert_eq!(config.user_content_markers.len(), 2);
    }

    #[test]
    fn depth_is_clamped() {
        let config = TranslatorConfig::from_toml_str("max_depth = 9").unwrap();
        assert_eq!(config.max_depth, MAX_TRANSLATION_DEPTH);
        assert_eq!(TranslatorConfig::default().with_max_depth(200).max_depth, 5);
    }

    #[test]
    fn builders_replace_sections() {
        let config = TranslatorConfig::default()
            .with_max_depth(3)
            .with_output(OutputConfig { pretty: false, indent: 2 });
        assert_eq!(config.max_depth, 3);
        assert!(!config.output.pretty);
        assert_eq!(config.output.indent, 2);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(
            TranslatorConfig::from_toml_str("max_depth = \"deep\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
