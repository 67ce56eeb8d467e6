//! wpdock - local WordPress container instance config validation
//!
//! wpdock checks an instance config (`wpdock.json`, `.yaml` or `.toml`) and
//! derives what is needed to start the containers: bind mounts for local
//! plugins, themes and the database seed, database environment variables,
//! and the list of plugins that need no download.

pub mod config;
pub mod error;
pub mod fs;
pub mod mounts;
pub mod paths;
pub mod validate;

// Re-exports for convenience
pub use config::{LoadOptions, RawConfig, ValidatedConfig};
pub use error::{ValidationError, WpdockError, WpdockResult};
pub use fs::{FileSystem, LocalFs};
pub use validate::validate;

