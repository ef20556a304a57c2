//! Domain error types for the reassignment planner.
//!
//! Uses `thiserror` for ergonomic error definitions with proper context.
//! The planner itself is total; every error here belongs to loading,
//! configuration or output.

use std::path::PathBuf;

use thiserror::Error;

use crate::assignment::BrokerId;

/// Errors raised while loading a partition assignment document.
#[derive(Error, Debug)]
pub enum AssignmentError {
    /// Failed to read the assignment file.
    #[error("failed to read assignment file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid partition assignment.
    #[error("failed to parse assignment: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors related to configuration parsing and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// A plan file suffix is empty, so the plan would overwrite the input.
    #[error("output suffix for plan {plan} must not be empty")]
    EmptySuffix { plan: u8 },

    /// Two plans would be written to the same file.
    #[error("output suffix '{suffix}' is used by more than one plan")]
    DuplicateSuffix { suffix: String },

    /// Output extension is empty or would escape the output directory.
    #[error("invalid output extension '{0}' (expected a bare extension such as 'json')")]
    InvalidExtension(String),

    /// Indentation must be whitespace to keep the output valid JSON.
    #[error("invalid indent {0:?}: only spaces and tabs are allowed")]
    InvalidIndent(String),

    /// Moving replicas from a broker onto itself always yields empty plans.
    #[error("source and target broker must differ (both are {node})")]
    SameNode { node: BrokerId },
}

/// Errors raised while rendering or writing a plan.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to serialize a plan to JSON.
    #[error("failed to serialize plan {plan}: {source}")]
    Serialize {
        plan: u8,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write a plan file.
    #[error("failed to write plan file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to the console stream.
    #[error("failed to write plan {plan} to console: {source}")]
    Console {
        plan: u8,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for assignment loading.
pub type AssignmentResult<T> = std::result::Result<T, AssignmentError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for output operations.
pub type OutputResult<T> = std::result::Result<T, OutputError>;
