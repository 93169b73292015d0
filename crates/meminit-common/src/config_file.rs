//! Configuration file structures for meminit.
//!
//! A config file holds a single `[image]` table whose keys mirror
//! [`ImageConfig`]. Any key left out keeps its built-in default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ImageConfig;

/// Top-level configuration file structure.
///
/// # Example
///
/// ```toml
/// [image]
/// output = "src/reuse/init_ram_zeros.mem"
/// lines = 2048
/// width = 64
/// fill = "0x0"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// The memory image to generate.
    #[serde(default)]
    pub image: ImageConfig,
}

impl ConfigFile {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "Config file read");

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be parsed as TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigFileError> {
        toml::from_str(content).map_err(|e| ConfigFileError::Parse {
            message: e.to_string(),
        })
    }
}

/// Configuration file errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse config file: {message}")]
    Parse { message: String },
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let config = ConfigFile::from_toml("").unwrap();
        assert_eq!(config.image, ImageConfig::default());
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
            [image]
            lines = 3
        "#;

        let config = ConfigFile::from_toml(toml).unwrap();

        assert_eq!(config.image.lines, 3);
        // Defaults applied
        assert_eq!(config.image.width, 64);
        assert_eq!(config.image.fill, 0);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [image]
            output = "build/ram.mem"
            lines = 1_024
            width = 32
            fill = "0xDEAD_BEEF"
        "#;

        let config = ConfigFile::from_toml(toml).unwrap();

        assert_eq!(config.image.output, PathBuf::from("build/ram.mem"));
        assert_eq!(config.image.lines, 1024);
        assert_eq!(config.image.width, 32);
        assert_eq!(config.image.fill, 0xDEAD_BEEF);
    }

    #[test]
    fn test_parse_integer_fill() {
        let toml = r#"
            [image]
            fill = 7
        "#;

        let config = ConfigFile::from_toml(toml).unwrap();
        assert_eq!(config.image.fill, 7);
    }

    #[test]
    fn test_toml_round_trip_preserves_wide_fill() {
        let mut config = ConfigFile::default();
        config.image.width = 128;
        config.image.fill = u128::MAX;

        let text = toml::to_string(&config).unwrap();
        let parsed = ConfigFile::from_toml(&text).unwrap();

        assert_eq!(parsed.image, config.image);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let invalid = "this is not valid toml [";
        let result = ConfigFile::from_toml(invalid);
        assert!(matches!(result, Err(ConfigFileError::Parse { .. })));
    }

    #[test]
    fn test_unknown_table_rejected() {
        let result = ConfigFile::from_toml("[server]\nbind_addr = \"0.0.0.0:80\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_misspelled_key_rejected() {
        let result = ConfigFile::from_toml("[image]\nwidht = 32\n");
        assert!(matches!(result, Err(ConfigFileError::Parse { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigFile::from_file("definitely/not/here/meminit.toml");
        assert!(matches!(result, Err(ConfigFileError::Io { .. })));
    }
}
