//! Instance configuration
//!
//! Loading order for the config file path:
//! 1. `--config` flag (highest priority)
//! 2. `WPDOCK_CONFIG` environment variable
//! 3. `wpdock.{json,yaml,yml,toml}` in the current directory

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    discover, discover_with_env, load_with_warnings, parse_with_warnings, ConfigFormat,
    ConfigWarning, LoadOptions, LoadedConfig, CONFIG_FILE_NAMES,
};
pub use types::{
    DatabaseConfig, FtpConfig, RawConfig, ValidatedConfig, CONFIG_KEYS, DATABASE_KEYS,
    DEFAULT_DB_PREFIX, DERIVED_KEYS, FTP_KEYS,
};
