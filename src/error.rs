//! Error types for wpdock
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wpdock operations
pub type WpdockResult<T> = Result<T, WpdockError>;

/// Which kind of local path failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Plugin,
    Theme,
    DatabaseDump,
}

impl PathKind {
    pub fn label(self) -> &'static str {
        match self {
            PathKind::Plugin => "Local plugin",
            PathKind::Theme => "Local theme",
            PathKind::DatabaseDump => "Local MySQL dump file",
        }
    }
}

/// The first defect found while validating an instance config.
///
/// Only one is ever reported; validation stops at the first violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required key is absent or empty. `index` is the 1-based ftp entry, if any.
    #[error("{}", missing_message(.field, .index))]
    MissingRequiredField {
        field: &'static str,
        index: Option<usize>,
    },

    /// Key is present but holds the wrong kind of value
    #[error("{}", wrong_type_message(.field, .index))]
    WrongFieldType {
        field: &'static str,
        index: Option<usize>,
    },

    /// Local path resolved against the working directory does not exist
    #[error("{} at '{}' does not exist.", .kind.label(), .path.display())]
    PathNotFound { kind: PathKind, path: PathBuf },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField { field, .. } => *field,
            ValidationError::WrongFieldType { field, .. } => *field,
            ValidationError::PathNotFound { kind, .. } => match kind {
                PathKind::Plugin => "localPlugins",
                PathKind::Theme => "localThemes",
                PathKind::DatabaseDump => "mysqlDumpfile",
            },
        }
    }

    /// Stable machine-readable tag, used in JSON output
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField { .. } => "missing_required_field",
            ValidationError::WrongFieldType { .. } => "wrong_field_type",
            ValidationError::PathNotFound { .. } => "path_not_found",
        }
    }
}

fn missing_message(field: &str, index: &Option<usize>) -> String {
    match *index {
        Some(i) => format!("The {} key for ftp config {} is not defined.", field, i),
        None => format!("{} is not defined in your config.", field),
    }
}

fn wrong_type_message(field: &str, index: &Option<usize>) -> String {
    match *index {
        Some(i) => format!(
            "The {} key for ftp config {} is defined but not {}.",
            field,
            i,
            expected_shape(field)
        ),
        None => format!(
            "{} is defined in your config but it is not {}.",
            field,
            expected_shape(field)
        ),
    }
}

/// What a field should have held, as used in wrong-type messages
pub fn expected_shape(field: &str) -> &'static str {
    match field {
        "instanceName" | "containerPort" | "host" | "user" | "password" | "dbName"
        | "dbPrefix" => "a string or number",
        "mysqlDumpfile" => "a string",
        "database" => "an object",
        "ftp" => "an array",
        _ => "an array of strings",
    }
}

/// Main error type for wpdock operations
#[derive(Error, Debug)]
pub enum WpdockError {
    /// Config failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config file extension is not one of json/yaml/yml/toml
    #[error("unsupported config format for {file} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat { file: PathBuf },

    /// Strict mode rejected keys the config schema does not know
    #[error("unknown keys in {file}: {}", .keys.join(", "))]
    UnknownKeys { file: PathBuf, keys: Vec<String> },

    /// No config file given and none found in the current directory
    #[error("no config file found in {dir} (looked for {})", crate::config::CONFIG_FILE_NAMES.join(", "))]
    ConfigNotFound { dir: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WpdockError {
    /// Config file the error relates to, if any
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            WpdockError::InvalidConfig { file, .. } => Some(file),
            WpdockError::UnsupportedFormat { file } => Some(file),
            WpdockError::UnknownKeys { file, .. } => Some(file),
            _ => None,
        }
    }
}
