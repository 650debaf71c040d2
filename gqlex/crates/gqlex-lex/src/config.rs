//! Lexer configuration.
//!
//! Configuration is a plain struct with serde support so that tools embedding
//! the lexer can keep it in a TOML file next to their other settings. Every
//! field has a default, so an empty file is a valid configuration.
//!
//! ```toml
//! preserve_comments = true
//! max_token_length = 65536
//! ```

use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Conventional file name for a standalone lexer configuration.
pub const CONFIG_FILE_NAME: &str = "gqlex.toml";

/// Options controlling how a [`Lexer`](crate::Lexer) scans a document.
///
/// # Example
///
/// ```
/// use gqlex_lex::LexerConfig;
///
/// let config = LexerConfig::from_toml_str("preserve_comments = true").unwrap();
/// assert!(config.preserve_comments);
/// assert_eq!(config.max_token_length, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexerConfig {
    /// Emit `#` comments as [`TokenKind::Comment`](crate::TokenKind::Comment)
    /// tokens instead of skipping them.
    pub preserve_comments: bool,

    /// Reject any token whose source text is longer than this many bytes.
    ///
    /// A limit of zero cannot be represented, so a parsed or built
    /// configuration never rejects every token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token_length: Option<NonZeroUsize>,
}

impl LexerConfig {
    /// Configuration that keeps comments in the token stream.
    pub fn preserving_comments() -> Self {
        Self {
            preserve_comments: true,
            ..Self::default()
        }
    }

    /// Sets the maximum token length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a limit of zero.
    pub fn with_max_token_length(mut self, max: usize) -> Result<Self, ConfigError> {
        let max = NonZeroUsize::new(max).ok_or_else(|| {
            ConfigError::Validation("max_token_length must be at least 1".to_string())
        })?;
        self.max_token_length = Some(max);
        Ok(self)
    }

    /// Parses a configuration from TOML text.
    ///
    /// A `max_token_length` of zero is rejected as a parse error.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded lexer configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// Missing parent directories are created.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LexerConfig::default();
        assert!(!config.preserve_comments);
        assert_eq!(config.max_token_length, None);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(LexerConfig::from_toml_str("").unwrap(), LexerConfig::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let config =
            LexerConfig::from_toml_str("preserve_comments = true\nmax_token_length = 128\n")
                .unwrap();
        assert_eq!(
            config,
            LexerConfig::preserving_comments()
                .with_max_token_length(128)
                .unwrap()
        );
    }

    #[test]
    fn test_zero_length_rejected() {
        let result = LexerConfig::from_toml_str("max_token_length = 0");
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let result = LexerConfig::default().with_max_token_length(0);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = LexerConfig::from_toml_str("preserve_whitespace = true");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let result = LexerConfig::from_toml_str("preserve_comments = \"yes\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_default_serializes_without_limit() {
        let text = LexerConfig::default().to_toml_string().unwrap();
        assert!(text.contains("preserve_comments = false"));
        assert!(!text.contains("max_token_length"));
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);

        let original = LexerConfig::preserving_comments()
            .with_max_token_length(4096)
            .unwrap();
        original.save_to_path(&config_path).unwrap();

        let loaded = LexerConfig::load_from_path(&config_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = LexerConfig::load_from_path(Path::new("/nonexistent/path/gqlex.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "max_token_length = -3").unwrap();
        assert!(LexerConfig::load_from_path(&config_path).is_err());
    }
}
