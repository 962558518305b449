//! TOML loading for `NetCheckConfig`.

// ============================================================================
// TOML config loading (requires "config-file" feature)
// ============================================================================

use crate::domain::{ConfigError, NetCheckConfig};
use std::fs;
use std::path::Path;

impl NetCheckConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// language = "zh-CN"
    /// special = ["1.1.1.1:53"]
    /// black = ["time.windows.com"]
    /// timeout_ms = 800
    /// blacklist_after_failures = 3
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let config = NetCheckConfig::from_toml_str(
            r#"
            language = "zh-CN"
            special = ["1.1.1.1:53"]
            black = ["time.windows.com"]
            timeout_ms = 800
            blacklist_after_failures = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.language.as_deref(), Some("zh-CN"));
        assert_eq!(config.special, vec!["1.1.1.1:53"]);
        assert_eq!(config.black, vec!["time.windows.com"]);
        assert_eq!(config.timeout_ms, 800);
        assert_eq!(config.blacklist_after_failures, 5);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = NetCheckConfig::from_toml_str("").unwrap();
        assert_eq!(config, NetCheckConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let err = NetCheckConfig::from_toml_str("timeout_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = NetCheckConfig::load("/nonexistent/netcheck.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
