use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::generator::DEFAULT_DAY_NOTE_PATTERN;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Translator configuration with validation
#[derive(Clone, Debug, PartialEq, Eq, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Regex matched against page titles when a target is `{date}`
    #[validate(
        length(min = 1, message = "Day-note pattern cannot be empty"),
        custom(function = "validate_pattern")
    )]
    pub day_note_pattern: String,

    /// YAML file listing known page titles and user display names
    pub catalog_file: Option<String>,

    /// Built-in relations removed from the registry at startup
    pub disabled_relations: Vec<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            day_note_pattern: DEFAULT_DAY_NOTE_PATTERN.to_string(),
            catalog_file: None,
            disabled_relations: Vec::new(),
        }
    }
}

impl TranslatorConfig {
    /// Create configuration from environment variables with validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            day_note_pattern: optional_env_var("CONDITION_DATALOG_DAY_NOTE_PATTERN")?
                .unwrap_or_else(|| DEFAULT_DAY_NOTE_PATTERN.to_string()),
            catalog_file: optional_env_var("CONDITION_DATALOG_CATALOG")?,
            disabled_relations: optional_env_var("CONDITION_DATALOG_DISABLED_RELATIONS")?
                .map(|v| parse_list(&v))
                .unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from CLI arguments with validation
    pub fn from_cli(cli: CliConfig) -> Result<Self, ConfigError> {
        let mut config = match cli.config_file {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::from_env()?,
        };
        if let Some(catalog) = cli.catalog_file {
            config.catalog_file = Some(catalog);
        }

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from YAML file
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            field: "yaml_file".to_string(),
            value: "file read failed".to_string(),
            source: Box::new(e),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            field: "yaml_content".to_string(),
            value: content,
            source: Box::new(e),
        })?;

        config.validate()?;
        Ok(config)
    }
}

/// CLI configuration (parsed from command line arguments)
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub config_file: Option<String>,
    pub catalog_file: Option<String>,
}

/// Unset is `None`; a value that is not valid Unicode is an error
fn optional_env_var(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

/// Comma-separated list, blanks dropped
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn validate_pattern(pattern: &str) -> Result<(), ValidationError> {
    regex::Regex::new(pattern)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_regex"))
}
