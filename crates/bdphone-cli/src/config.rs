//! Configuration management for the CLI
//!
//! This module handles loading and merging configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//! - Command-line arguments

use crate::cli::{ConfigFormat, OutputFormat, ValidationFlags};
use crate::error::{Error, Result};
use bdphone_core::{TransformOptions, ValidationOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validation defaults applied to every command
    pub validation: ValidationOptions,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Named transform presets for `customize --preset`
    pub transforms: BTreeMap<String, TransformOptions>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format when `--output` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, full, json)
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl ConfigFormat {
    /// Pick a format from a file extension, JSON when unknown
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, ConfigFormat::from_path(path))
    }

    fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Per-user configuration file location
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bdphone").join("config.yaml"))
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory
        for name in [".bdphone", "bdphone"] {
            for ext in ["yaml", "json", "toml"] {
                paths.push(PathBuf::from(format!("{}.{}", name, ext)));
            }
        }

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let bdphone_dir = config_dir.join("bdphone");
            paths.push(bdphone_dir.join("config.yaml"));
            paths.push(bdphone_dir.join("config.json"));
            paths.push(bdphone_dir.join("config.toml"));
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".bdphone.yaml"));
            paths.push(home_dir.join(".bdphone.json"));
        }

        paths
    }

    /// Serialize in the given format
    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Yaml => Ok(serde_yaml::to_string(self)?),
            ConfigFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e))),
        }
    }

    /// Save configuration to a file, in the format implied by its extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.render(ConfigFormat::from_path(path))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validation options with command-line flags applied on top
    pub fn validation_options(&self, flags: &ValidationFlags) -> ValidationOptions {
        apply_validation_flags(self.validation.clone(), flags)
    }

    /// Look up a named transform preset
    pub fn transform_preset(&self, name: &str) -> Result<&TransformOptions> {
        self.transforms.get(name).ok_or_else(|| Error::PresetNotFound {
            name: name.to_string(),
        })
    }
}

/// Override `options` with whatever the flags set explicitly
pub fn apply_validation_flags(
    mut options: ValidationOptions,
    flags: &ValidationFlags,
) -> ValidationOptions {
    if flags.strict_zero {
        options.allow_missing_leading_zero = false;
    }
    if let Some(operator) = &flags.expect_operator {
        options.expected_operator = Some(operator.clone());
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use bdphone_core::TransformBase;
    use std::io::Write;

    #[test]
    fn test_parse_yaml_with_presets() {
        let yaml = r#"
validation:
  allow_missing_leading_zero: false
  expected_operator: gp
transforms:
  sms:
    remove_from_start: 1
    prefix: "+880"
  intl-dashed:
    base: international
    remove_from_start: 3
    prefix: "+"
    separator: "-"
"#;
        let config = Config::parse(yaml, ConfigFormat::Yaml).unwrap();
        assert!(!config.validation.allow_missing_leading_zero);
        assert_eq!(config.validation.expected_operator.as_deref(), Some("gp"));

        let sms = config.transform_preset("sms").unwrap();
        assert_eq!(sms.remove_from_start, 1);
        assert_eq!(sms.prefix, "+880");
        assert_eq!(
            config.transform_preset("intl-dashed").unwrap().base,
            TransformBase::International
        );
        assert!(matches!(
            config.transform_preset("missing"),
            Err(Error::PresetNotFound { .. })
        ));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[validation]
allow_missing_leading_zero = true

[logging]
level = "debug"

[transforms.core]
base = "core"
"#;
        let config = Config::parse(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "compact");
        assert_eq!(config.transform_preset("core").unwrap().base, TransformBase::Core);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::default();
        let flags = ValidationFlags {
            strict_zero: true,
            expect_operator: Some("robi".to_string()),
        };
        let options = config.validation_options(&flags);
        assert!(!options.allow_missing_leading_zero);
        assert_eq!(options.expected_operator.as_deref(), Some("robi"));

        let untouched = config.validation_options(&ValidationFlags::default());
        assert_eq!(untouched, ValidationOptions::default());
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"output": {{"format": "json-pretty", "color": false}}}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(!config.output.color);
        assert_eq!(config.output.format, Some(OutputFormat::JsonPretty));
        assert!(config.transforms.is_empty());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.transforms.insert(
            "sms".to_string(),
            TransformOptions::new().remove_from_start(1).prefix("+880"),
        );
        config.save(&path).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_render_toml_parses_back() {
        let mut config = Config::default();
        config.validation.expected_operator = Some("bl".to_string());
        let rendered = config.render(ConfigFormat::Toml).unwrap();
        assert_eq!(Config::parse(&rendered, ConfigFormat::Toml).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/bdphone.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
