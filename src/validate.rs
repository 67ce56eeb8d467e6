//! Instance config validation
//!
//! A single pass turns a [`RawConfig`] into a [`ValidatedConfig`]. Checks run
//! in a fixed order and stop at the first violation:
//!
//! 1. `instanceName`, `containerPort` are set
//! 2. list fields (`localPlugins`, `localThemes`, `downloadPlugins`, `ftp`) are arrays
//! 3. every `ftp` entry has `host`, `user`, `password`
//! 4. local plugin and theme entries are strings that exist on disk
//! 5. the database dump exists on disk, then the db overrides are scalars
//!
//! The same malformed input therefore always reports the same error.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Map, Value};

use crate::config::{DatabaseConfig, FtpConfig, RawConfig, ValidatedConfig, DEFAULT_DB_PREFIX};
use crate::error::{PathKind, ValidationError};
use crate::fs::FileSystem;
use crate::mounts::VolumeMount;
use crate::paths::{basename, resolve_absolute};

type Result<T> = std::result::Result<T, ValidationError>;

/// Validate `raw` and derive mounts, env vars and the installed-plugin list.
///
/// Relative paths in the config resolve against `working_dir`, the directory
/// the config file was loaded from.
pub fn validate(
    raw: &RawConfig,
    working_dir: &Path,
    fs: &impl FileSystem,
) -> Result<ValidatedConfig> {
    // Falsy values count as absent from here on.
    let instance_name = present(&raw.instance_name);
    let container_port = present(&raw.container_port);
    let local_plugins = present(&raw.local_plugins);
    let local_themes = present(&raw.local_themes);
    let download_plugins = present(&raw.download_plugins);
    let ftp = present(&raw.ftp);
    let database = present(&raw.database);
    let mysql_dumpfile = present(&raw.mysql_dumpfile);

    let instance_name = required_scalar(instance_name, "instanceName")?;
    let container_port = required_scalar(container_port, "containerPort")?;

    let local_plugins = array(local_plugins, "localPlugins", None)?;
    let local_themes = array(local_themes, "localThemes", None)?;
    let download_plugins = array(download_plugins, "downloadPlugins", None)?;
    let ftp_entries = array(ftp, "ftp", None)?;

    let mut ftp = Vec::with_capacity(ftp_entries.len());
    let mut ftp_installed = Vec::new();
    for (i, entry) in ftp_entries.iter().enumerate() {
        let source = ftp_entry(entry, i + 1)?;
        ftp_installed.extend(source.plugins.iter().map(|p| basename(p)));
        ftp.push(source);
    }

    // List entries are type-checked where they are consumed.
    let mut volumes = Vec::new();
    let mut local_installed = Vec::new();
    let mut plugin_names = Vec::with_capacity(local_plugins.len());
    for plugin in local_plugins {
        let plugin = string_entry(plugin, "localPlugins", None)?;
        let host = existing_path(working_dir, &plugin, PathKind::Plugin, fs)?;
        let name = basename(&host.to_string_lossy());
        volumes.push(VolumeMount::plugin(host, &name));
        local_installed.push(name);
        plugin_names.push(plugin);
    }
    let mut theme_names = Vec::with_capacity(local_themes.len());
    for theme in local_themes {
        let theme = string_entry(theme, "localThemes", None)?;
        let host = existing_path(working_dir, &theme, PathKind::Theme, fs)?;
        let name = basename(&host.to_string_lossy());
        volumes.push(VolumeMount::theme(host, &name));
        theme_names.push(theme);
    }
    let download_plugins = download_plugins
        .iter()
        .map(|entry| string_entry(entry, "downloadPlugins", None))
        .collect::<Result<Vec<_>>>()?;

    let mut envvars = BTreeMap::new();
    envvars.insert("DB_NAME".to_string(), instance_name.clone());
    envvars.insert("DB_PREFIX".to_string(), DEFAULT_DB_PREFIX.to_string());

    let database = match database {
        Some(Value::Object(block)) => Some(database_block(block, working_dir, fs, &mut volumes)?),
        Some(_) => return Err(wrong_type("database", None)),
        None => None,
    };
    if let Some(db) = &database {
        if let Some(name) = &db.db_name {
            envvars.insert("DB_NAME".to_string(), name.clone());
        }
        if let Some(prefix) = &db.db_prefix {
            envvars.insert("DB_PREFIX".to_string(), prefix.clone());
        }
    }

    let mysql_dumpfile = optional_string(mysql_dumpfile, "mysqlDumpfile")?.unwrap_or_default();

    let mut already_installed = download_plugins.clone();
    already_installed.extend(ftp_installed);
    already_installed.extend(local_installed);

    Ok(ValidatedConfig {
        instance_name,
        container_port,
        local_plugins: plugin_names,
        local_themes: theme_names,
        download_plugins,
        ftp,
        database,
        mysql_dumpfile,
        volumes,
        envvars,
        already_installed,
    })
}

/// `Some` unless the value is null, false, zero or an empty string.
///
/// Empty arrays and objects are present.
fn present(value: &Value) -> Option<&Value> {
    let truthy = match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    truthy.then_some(value)
}

/// Render a present scalar as text; `None` for arrays and objects.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        // Float display drops a zero fraction: 8080.0 renders as 8080.
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn wrong_type(field: &'static str, index: Option<usize>) -> ValidationError {
    ValidationError::WrongFieldType { field, index }
}

fn missing(field: &'static str, index: Option<usize>) -> ValidationError {
    ValidationError::MissingRequiredField { field, index }
}

fn required_scalar(value: Option<&Value>, field: &'static str) -> Result<String> {
    let value = value.ok_or(missing(field, None))?;
    scalar_text(value).ok_or(wrong_type(field, None))
}

fn optional_string(value: Option<&Value>, field: &'static str) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(wrong_type(field, None)),
    }
}

fn array<'a>(
    value: Option<&'a Value>,
    field: &'static str,
    index: Option<usize>,
) -> Result<&'a [Value]> {
    match value {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(wrong_type(field, index)),
    }
}

fn string_entry(item: &Value, field: &'static str, index: Option<usize>) -> Result<String> {
    match item {
        Value::String(s) => Ok(s.clone()),
        _ => Err(wrong_type(field, index)),
    }
}

fn string_list(
    value: Option<&Value>,
    field: &'static str,
    index: Option<usize>,
) -> Result<Vec<String>> {
    array(value, field, index)?
        .iter()
        .map(|item| string_entry(item, field, index))
        .collect()
}

fn ftp_entry(entry: &Value, index: usize) -> Result<FtpConfig> {
    let empty = Map::new();
    let fields = entry.as_object().unwrap_or(&empty);

    let credential = |field: &'static str| -> Result<String> {
        let value = fields
            .get(field)
            .and_then(present)
            .ok_or(missing(field, Some(index)))?;
        scalar_text(value).ok_or(wrong_type(field, Some(index)))
    };

    let host = credential("host")?;
    let user = credential("user")?;
    let password = credential("password")?;

    let plugins = string_list(fields.get("plugins").and_then(present), "plugins", Some(index))?;
    let themes = string_list(fields.get("themes").and_then(present), "themes", Some(index))?;

    Ok(FtpConfig {
        host,
        user,
        password,
        plugins,
        themes,
    })
}

/// Mounts the dump when set, then reads the env overrides.
fn database_block(
    block: &Map<String, Value>,
    working_dir: &Path,
    fs: &impl FileSystem,
    volumes: &mut Vec<VolumeMount>,
) -> Result<DatabaseConfig> {
    let mysql_dumpfile = optional_string(
        block.get("mysqlDumpfile").and_then(present),
        "mysqlDumpfile",
    )?;
    if let Some(dump) = &mysql_dumpfile {
        let host = existing_path(working_dir, dump, PathKind::DatabaseDump, fs)?;
        volumes.push(VolumeMount::database_seed(host));
    }

    let override_value = |key: &'static str| -> Result<Option<String>> {
        match block.get(key).and_then(present) {
            None => Ok(None),
            Some(value) => scalar_text(value).map(Some).ok_or(wrong_type(key, None)),
        }
    };

    Ok(DatabaseConfig {
        mysql_dumpfile,
        db_name: override_value("dbName")?,
        db_prefix: override_value("dbPrefix")?,
    })
}

fn existing_path(
    working_dir: &Path,
    relative: &str,
    kind: PathKind,
    fs: &impl FileSystem,
) -> Result<std::path::PathBuf> {
    let path = resolve_absolute(working_dir, Path::new(relative));
    if fs.exists(&path) {
        Ok(path)
    } else {
        Err(ValidationError::PathNotFound { kind, path })
    }
}
