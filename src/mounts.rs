//! Container bind mounts
//!
//! Container-side locations are fixed by the WordPress image layout and must
//! not change.

use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

/// Mount root for local plugins, one subdirectory per plugin
pub const PLUGINS_TARGET: &str = "/app/wp-content/plugins";
/// Mount root for local themes, one subdirectory per theme
pub const THEMES_TARGET: &str = "/app/wp-content/themes";
/// Seed file the database container imports on first start
pub const DB_SEED_TARGET: &str = "/data/db.sql";

/// A host path mapped into the container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VolumeMount {
    pub host: PathBuf,
    pub target: String,
}

impl VolumeMount {
    pub fn plugin(host: PathBuf, name: &str) -> Self {
        Self {
            host,
            target: format!("{}/{}", PLUGINS_TARGET, name),
        }
    }

    pub fn theme(host: PathBuf, name: &str) -> Self {
        Self {
            host,
            target: format!("{}/{}", THEMES_TARGET, name),
        }
    }

    pub fn database_seed(host: PathBuf) -> Self {
        Self {
            host,
            target: DB_SEED_TARGET.to_string(),
        }
    }

    /// The `host:target` pair without the `-v` flag
    pub fn spec(&self) -> String {
        format!("{}:{}", self.host.display(), self.target)
    }
}

impl fmt::Display for VolumeMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-v {}", self.spec())
    }
}

impl Serialize for VolumeMount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
