// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::formatters::FormatterKind;
use crate::observability::messages::{config::ConfigLoaded, StructuredLog};
use crate::redaction::FilteredFields;
use crate::sink::Severity;

/// File-level configuration for the job log pipeline.
///
/// Covers the parts of the runtime configuration that can be written down.
/// The pre-format hook and a logger override are code, and are attached
/// through [`SubscriberConfig`](crate::config::SubscriberConfig).
///
/// # Fields
/// * `filtered_params` - Argument keys whose values are replaced with `FILTERED`
/// * `formatter` - Output format (defaults to `logstash`)
/// * `log_level` - Severity records are written at (defaults to `info`)
///
/// # Example
/// ```yaml
/// filtered_params: [password, token]
/// formatter: logstash
/// log_level: info
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub filtered_params: FilteredFields,
    pub formatter: FormatterKind,
    pub log_level: Severity,
}

impl Config {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Load a config from a YAML (`.yaml`, `.yml`) or TOML (`.toml`) file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let read = || {
        fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    let cfg = match extension.as_deref() {
        Some("yaml") | Some("yml") => Config::from_yaml_str(&read()?)?,
        Some("toml") => Config::from_toml_str(&read()?)?,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    ConfigLoaded {
        source: &path.display().to_string(),
        formatter: cfg.formatter.as_str(),
        log_level: cfg.log_level.as_str(),
        filtered_param_count: cfg.filtered_params.len(),
    }
    .log();

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
filtered_params: [password, token]
formatter: key_value
log_level: debug
"#;

        let cfg = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.filtered_params, FilteredFields::new(["password", "token"]));
        assert_eq!(cfg.formatter, FormatterKind::KeyValue);
        assert_eq!(cfg.log_level, Severity::Debug);
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_yaml_str("{}").unwrap();
        assert!(cfg.filtered_params.is_empty());
        assert_eq!(cfg.formatter, FormatterKind::Logstash);
        assert_eq!(cfg.log_level, Severity::Info);
    }

    #[test]
    fn test_rejects_unknown_keys_and_values() {
        struct TestCase {
            name: &'static str,
            yaml: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "unknown key",
                yaml: "filtered: [password]",
            },
            TestCase {
                name: "unknown formatter",
                yaml: "formatter: xml",
            },
            TestCase {
                name: "unknown level",
                yaml: "log_level: loud",
            },
        ];

        for case in test_cases {
            assert!(
                matches!(Config::from_yaml_str(case.yaml), Err(ConfigError::Yaml(_))),
                "{} should be rejected",
                case.name
            );
        }
    }

    #[test]
    fn test_load_yaml_file() {
        let file = write_temp(".yaml", "filtered_params: [ssn]\nformatter: json\n");

        let cfg = load_config(file.path()).unwrap();

        assert!(cfg.filtered_params.contains("ssn"));
        assert_eq!(cfg.formatter, FormatterKind::Json);
    }

    #[test]
    fn test_load_toml_file() {
        let file = write_temp(
            ".toml",
            "filtered_params = [\"password\"]\nformatter = \"plain\"\nlog_level = \"warn\"\n",
        );

        let cfg = load_config(file.path()).unwrap();

        assert!(cfg.filtered_params.contains("password"));
        assert_eq!(cfg.formatter, FormatterKind::Plain);
        assert_eq!(cfg.log_level, Severity::Warn);
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_temp(".toml", "formatter = [");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".ini", "formatter=json");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");

        let err = load_config(&missing).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }
}
