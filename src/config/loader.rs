//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{WpdockError, WpdockResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{RawConfig, CONFIG_KEYS, DATABASE_KEYS, DERIVED_KEYS, FTP_KEYS};

/// File names tried, in order, when no config path is given
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "wpdock.json",
    "wpdock.yaml",
    "wpdock.yml",
    "wpdock.toml",
];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key, e.g. `ftp.1.hots`
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first mention, if found
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Supported config file formats, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Options that change how a config file is loaded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject unknown keys instead of warning about them
    pub strict: bool,
}

impl LoadOptions {
    /// Apply environment variable overrides (`WPDOCK_*` prefix)
    pub fn with_env_overrides(self) -> Self {
        self.with_env_overrides_from(|key| std::env::var(key).ok(), &mut std::io::stderr())
    }

    /// Same as [`LoadOptions::with_env_overrides`] with an injectable environment
    pub fn with_env_overrides_from<W: std::io::Write>(
        mut self,
        get_env: impl Fn(&str) -> Option<String>,
        warnings: &mut W,
    ) -> Self {
        if let Some(value) = get_env("WPDOCK_STRICT") {
            let validator = EnvVarValidator::new("WPDOCK_STRICT", &["true", "false"]);
            self.strict = self.strict
                || validator.parse_with_writer(&value, parse_bool, false, warnings);
        }
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// A config file parsed from disk
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub raw: RawConfig,
    /// The file the config came from
    pub path: PathBuf,
    /// Absolute directory of `path`; base for relative paths in the config
    pub working_dir: PathBuf,
    pub warnings: Vec<ConfigWarning>,
}

/// Find the config file to load.
///
/// An explicit path wins, then `WPDOCK_CONFIG`, then the first of
/// [`CONFIG_FILE_NAMES`] present in `cwd`.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> WpdockResult<PathBuf> {
    discover_with_env(explicit, cwd, |key| std::env::var(key).ok())
}

pub fn discover_with_env(
    explicit: Option<&Path>,
    cwd: &Path,
    get_env: impl Fn(&str) -> Option<String>,
) -> WpdockResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(cwd.join(path));
    }
    if let Some(path) = get_env("WPDOCK_CONFIG").filter(|p| !p.is_empty()) {
        return Ok(cwd.join(path));
    }
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| cwd.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| WpdockError::ConfigNotFound {
            dir: cwd.to_path_buf(),
        })
}

/// Load a config file and collect non-fatal warnings (unknown keys).
///
/// With `options.strict`, unknown keys are an error instead.
pub fn load_with_warnings(path: &Path, options: LoadOptions) -> WpdockResult<LoadedConfig> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| WpdockError::UnsupportedFormat {
        file: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path)?;
    let (raw, warnings) = parse_with_warnings(&content, format, path)?;

    if options.strict && !warnings.is_empty() {
        return Err(WpdockError::UnknownKeys {
            file: path.to_path_buf(),
            keys: warnings.into_iter().map(|w| w.key).collect(),
        });
    }

    let working_dir = absolute_parent(path)?;
    Ok(LoadedConfig {
        raw,
        path: path.to_path_buf(),
        working_dir,
        warnings,
    })
}

/// Parse config text in the given format, reporting unknown keys.
pub fn parse_with_warnings(
    content: &str,
    format: ConfigFormat,
    file: &Path,
) -> WpdockResult<(RawConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();

    let parsed = match format {
        ConfigFormat::Json => {
            let mut de = serde_json::Deserializer::from_str(content);
            serde_ignored::deserialize(&mut de, |p| unknown_paths.push(p.to_string()))
                .and_then(|raw: RawConfig| de.end().map(|_| raw))
                .map_err(|e| e.to_string())
        }
        ConfigFormat::Yaml => {
            let de = serde_yaml_ng::Deserializer::from_str(content);
            serde_ignored::deserialize(de, |p| unknown_paths.push(p.to_string()))
                .map_err(|e| e.to_string())
        }
        ConfigFormat::Toml => {
            let de = toml::de::Deserializer::new(content);
            serde_ignored::deserialize(de, |p| unknown_paths.push(p.to_string()))
                .map_err(|e| e.to_string())
        }
    };
    let raw: RawConfig = parsed.map_err(|message| WpdockError::InvalidConfig {
        file: file.to_path_buf(),
        message,
    })?;

    unknown_paths.retain(|p| !DERIVED_KEYS.contains(&p.as_str()));
    unknown_paths.extend(nested_unknown_keys(&raw));

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            let candidates = candidates_for(&path_str);
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key, candidates),
                key: path_str,
                file: file.to_path_buf(),
            }
        })
        .collect();

    Ok((raw, warnings))
}

/// Unknown keys inside `ftp` entries and the `database` block.
///
/// Those fields stay untyped after parsing, so serde never sees their keys.
fn nested_unknown_keys(raw: &RawConfig) -> Vec<String> {
    let mut unknown = Vec::new();
    if let Value::Array(entries) = &raw.ftp {
        for (i, entry) in entries.iter().enumerate() {
            if let Value::Object(map) = entry {
                unknown.extend(
                    map.keys()
                        .filter(|k| !FTP_KEYS.contains(&k.as_str()))
                        .map(|k| format!("ftp.{}.{}", i + 1, k)),
                );
            }
        }
    }
    if let Value::Object(map) = &raw.database {
        unknown.extend(
            map.keys()
                .filter(|k| !DATABASE_KEYS.contains(&k.as_str()))
                .map(|k| format!("database.{}", k)),
        );
    }
    unknown
}

fn candidates_for(path: &str) -> &'static [&'static str] {
    if path.starts_with("ftp.") {
        FTP_KEYS
    } else if path.starts_with("database.") {
        DATABASE_KEYS
    } else {
        CONFIG_KEYS
    }
}

fn absolute_parent(path: &Path) -> WpdockResult<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    let parent = absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"));
    Ok(crate::paths::normalize(&parent))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
