//! Configuration types for gostyle.
//!
//! Configuration tunes discovery and a few convention constants. It never
//! enables or disables rules: every rule always runs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Convention constants used by individual rules.
    #[serde(default)]
    pub conventions: ConventionsConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Glob patterns to exclude from discovery.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Maximum number of parallel file analyses.
    #[serde(default)]
    pub parallelism: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
            respect_gitignore: true,
            parallelism: None,
        }
    }
}

/// Constants that parameterize individual conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionsConfig {
    /// Path segment marking configuration-plugin packages.
    #[serde(default = "default_cfgplugin_segment")]
    pub cfgplugin_segment: String,

    /// Issue tracker URL prefix suggested in place of bare bug references.
    #[serde(default = "default_issue_url_base")]
    pub issue_url_base: String,
}

impl Default for ConventionsConfig {
    fn default() -> Self {
        Self {
            cfgplugin_segment: default_cfgplugin_segment(),
            issue_url_base: default_issue_url_base(),
        }
    }
}

fn default_exclude() -> Vec<String> {
    vec!["**/vendor/**".to_string(), "**/.git/**".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_cfgplugin_segment() -> String {
    "cfgplugins".to_string()
}

fn default_issue_url_base() -> String {
    "https://example.corp.example.com/issues/".to_string()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.analyzer.parallelism.is_none());
        assert_eq!(config.conventions.cfgplugin_segment, "cfgplugins");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
exclude = ["**/generated/**"]
parallelism = 2

[conventions]
issue_url_base = "https://bugs.example.org/"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**".to_string()]);
        assert_eq!(config.analyzer.parallelism, Some(2));
        assert!(config.analyzer.respect_gitignore);
        assert_eq!(config.conventions.issue_url_base, "https://bugs.example.org/");
        assert_eq!(config.conventions.cfgplugin_segment, "cfgplugins");
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::parse("[analyzer]\nparallelism = \"many\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(std::path::Path::new("/no/such/gostyle.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
