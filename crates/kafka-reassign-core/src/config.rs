//! Configuration types for the reassignment planner.
//!
//! Configuration is optional. When a file is given it is loaded from YAML
//! and validated before use; every field has a default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};
use crate::planner::PlanStage;

/// Root configuration for the planner.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlannerConfig {
    /// Where and how plans are written.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Destination for generated plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One JSON file per plan next to the input document.
    #[default]
    Files,
    /// All plans printed to stdout with a header per plan.
    Console,
}

/// Plan output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Console or file output.
    #[serde(default)]
    pub mode: OutputMode,

    /// File name suffixes for plans 1, 2 and 3.
    ///
    /// Each plan is written to `<input without extension><suffix>.<extension>`.
    #[serde(default = "default_suffixes")]
    pub suffixes: [String; 3],

    /// Extension of plan files, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Indentation unit for pretty-printed JSON.
    #[serde(default = "default_indent")]
    pub indent: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

// Default value functions

fn default_suffixes() -> [String; 3] {
    ["-01".to_string(), "-02".to_string(), "-03".to_string()]
}

fn default_extension() -> String {
    "json".to_string()
}

fn default_indent() -> String {
    "\t".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// Default implementations

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            suffixes: default_suffixes(),
            extension: default_extension(),
            indent: default_indent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Configuration loading and validation

impl PlannerConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if
    /// validation fails.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&content)
    }

    /// Load configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation check fails.
    pub fn validate(&self) -> ConfigResult<()> {
        self.output.validate()
    }
}

impl OutputConfig {
    /// Validate the output configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a suffix is empty (the plan would overwrite the input)
    /// - two plans share a suffix
    /// - `extension` is empty or contains a path separator or dot
    /// - `indent` contains anything besides spaces and tabs
    pub fn validate(&self) -> ConfigResult<()> {
        for stage in PlanStage::ALL {
            let suffix = self.suffix(stage);
            if suffix.is_empty() {
                return Err(ConfigError::EmptySuffix {
                    plan: stage.number(),
                });
            }

            let uses = self.suffixes.iter().filter(|s| *s == suffix).count();
            if uses > 1 {
                return Err(ConfigError::DuplicateSuffix {
                    suffix: suffix.to_string(),
                });
            }
        }

        if self.extension.is_empty() || self.extension.contains(['/', '\\', '.']) {
            return Err(ConfigError::InvalidExtension(self.extension.clone()));
        }

        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConfigError::InvalidIndent(self.indent.clone()));
        }

        Ok(())
    }

    /// File name suffix for a stage.
    #[must_use]
    pub fn suffix(&self, stage: PlanStage) -> &str {
        &self.suffixes[stage.index()]
    }
}
