//! Path resolution helpers
//!
//! Config entries are relative to the directory the config file was loaded
//! from. Resolution is purely lexical: `.` and `..` are folded without
//! touching the filesystem, so a path that does not exist still resolves to
//! the absolute location reported back to the user.

use std::path::{Component, Path, PathBuf};

/// Resolve `relative` against `base`.
///
/// An absolute `relative` ignores `base`. `..` never climbs above the root.
pub fn resolve_absolute(base: &Path, relative: &Path) -> PathBuf {
    let joined = if relative.is_absolute() {
        relative.to_path_buf()
    } else {
        base.join(relative)
    };
    normalize(&joined)
}

/// Lexically normalize a path (fold `.` and `..`, drop trailing separators)
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}

/// Final path segment, ignoring trailing separators.
///
/// Works on the raw text, so `.` and `..` segments are kept as written.
/// Returns an empty string for a bare root.
pub fn basename(path: &str) -> String {
    path.trim_end_matches(std::path::is_separator)
        .rsplit(std::path::is_separator)
        .next()
        .unwrap_or_default()
        .to_string()
}
