//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod backend;
mod logging;
mod output;
mod repl;

pub use backend::FileBackendConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat backend settings
    pub backend: FileBackendConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        match Url::parse(&self.backend.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidBaseUrl,
                message: format!(
                    "backend.base_url: scheme '{}' is not supported, use http or https",
                    url.scheme()
                ),
            }),
            Err(e) => issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidBaseUrl,
                message: format!("backend.base_url: '{}' {}", self.backend.base_url, e),
            }),
        }

        if self.backend.timeout_seconds == Some(0) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ZeroTimeout,
                message: "backend.timeout_seconds: 0 would fail every request; remove it to wait indefinitely"
                    .to_string(),
            });
        }

        if matches!(&self.logging.transcript_file, Some(path) if path.trim().is_empty()) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EmptyPath {
                    field: "logging.transcript_file",
                },
                message: "logging.transcript_file is empty; no transcript will be written"
                    .to_string(),
            });
        }

        issues
    }

    /// Whether any issue makes the configuration unusable
    pub fn has_errors(&self) -> bool {
        self.validate()
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
base_url = "http://orders.internal:9000"
timeout_seconds = 20

[output]
color = false

[repl]
show_progress = false
history_file = "~/.local/share/order-chat/history.txt"

[logging]
transcript_file = "transcript.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url, "http://orders.internal:9000");
        assert_eq!(config.backend.timeout_seconds, Some(20));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.logging.transcript_file.as_deref(),
            Some("transcript.jsonl")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[backend]
timeout_seconds = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert!(config.logging.transcript_file.is_none());
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_bad_url_and_zero_timeout() {
        let mut config = FileConfig::default();
        config.backend.base_url = "localhost".to_string();
        config.backend.timeout_seconds = Some(0);

        let issues = config.validate();
        let codes: Vec<_> = issues.iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            vec![ConfigIssueCode::InvalidBaseUrl, ConfigIssueCode::ZeroTimeout]
        );
        assert!(config.has_errors());
    }

    #[test]
    fn test_validate_unsupported_scheme() {
        let mut config = FileConfig::default();
        config.backend.base_url = "ws://localhost:8000".to_string();
        assert_eq!(config.validate()[0].code, ConfigIssueCode::InvalidBaseUrl);
    }

    #[test]
    fn test_empty_transcript_path_is_warning() {
        let mut config = FileConfig::default();
        config.logging.transcript_file = Some(" ".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!config.has_errors());
    }
}
