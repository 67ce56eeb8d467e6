//! Configuration data types
//!
//! `RawConfig` is what comes off disk: every field is kept as an untyped
//! value so "absent", "falsy" and "present but the wrong shape" stay
//! distinguishable until validation. `ValidatedConfig` is what comes out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mounts::VolumeMount;

/// Default table prefix when `database.dbPrefix` is not set
pub const DEFAULT_DB_PREFIX: &str = "wp_";

/// Top-level keys the instance config understands
pub const CONFIG_KEYS: &[&str] = &[
    "instanceName",
    "containerPort",
    "localPlugins",
    "localThemes",
    "downloadPlugins",
    "ftp",
    "database",
    "mysqlDumpfile",
];

/// Keys written by a previous validation pass. Accepted and ignored on input
/// so enriched output can be fed back in.
pub const DERIVED_KEYS: &[&str] = &["volumes", "envvars", "alreadyInstalled"];

/// Keys of a single `ftp` entry
pub const FTP_KEYS: &[&str] = &["host", "user", "password", "plugins", "themes"];

/// Keys of the `database` block
pub const DATABASE_KEYS: &[&str] = &["mysqlDumpfile", "dbName", "dbPrefix"];

/// Instance config as loaded, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    #[serde(default)]
    pub instance_name: Value,

    #[serde(default)]
    pub container_port: Value,

    #[serde(default)]
    pub local_plugins: Value,

    #[serde(default)]
    pub local_themes: Value,

    #[serde(default)]
    pub download_plugins: Value,

    #[serde(default)]
    pub ftp: Value,

    #[serde(default)]
    pub database: Value,

    #[serde(default)]
    pub mysql_dumpfile: Value,
}

impl RawConfig {
    /// Build a raw config from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// One remote source of proprietary plugins and themes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FtpConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<String>,
}

/// Database overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mysql_dumpfile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_prefix: Option<String>,
}

/// Instance config after a successful validation pass, with derived fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedConfig {
    pub instance_name: String,
    pub container_port: String,
    pub local_plugins: Vec<String>,
    pub local_themes: Vec<String>,
    pub download_plugins: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ftp: Vec<FtpConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
    pub mysql_dumpfile: String,

    /// Bind mounts for local plugins, then local themes, then the db seed
    pub volumes: Vec<VolumeMount>,
    /// Always holds `DB_NAME` and `DB_PREFIX`
    pub envvars: BTreeMap<String, String>,
    /// Plugins that need no download: `downloadPlugins`, ftp plugins, local plugins
    pub already_installed: Vec<String>,
}

impl ValidatedConfig {
    /// Container runtime arguments: one `-v` per mount, then one `-e` per env var
    pub fn runtime_args(&self) -> Vec<String> {
        let mut args: Vec<String> = self.volumes.iter().map(|v| v.to_string()).collect();
        args.extend(
            self.envvars
                .iter()
                .map(|(key, value)| format!("-e {}={}", key, value)),
        );
        args
    }
}
