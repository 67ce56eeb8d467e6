use std::path::Path;

use crossterm::style::Color;

use wpdock::config::{ConfigWarning, ValidatedConfig};

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::{colors, paint, Icon};

/// Verbosity-gated progress messages on stderr.
///
/// In JSON mode all human output is suppressed; events go to stdout instead.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    json: bool,
    verbose: u8,
    caps: TerminalCapabilities,
}

impl Reporter {
    pub fn new(json: bool, verbose: u8) -> Self {
        Self {
            json,
            verbose,
            caps: detect_capabilities(),
        }
    }

    fn icon(&self, icon: Icon, color: Color) -> String {
        paint(
            icon.render(self.caps.supports_unicode),
            color,
            self.caps.supports_color,
        )
    }

    /// Shown with `-v`
    pub fn info(&self, message: impl AsRef<str>) {
        if !self.json && self.verbose >= 1 {
            eprintln!(
                "{} {}",
                self.icon(Icon::Arrow, colors::DIM),
                message.as_ref()
            );
        }
    }

    /// Shown with `-vv`
    pub fn debug(&self, message: impl AsRef<str>) {
        if !self.json && self.verbose >= 2 {
            eprintln!(
                "{}",
                paint(message.as_ref(), colors::DIM, self.caps.supports_color)
            );
        }
    }

    pub fn config_warnings(&self, warnings: &[ConfigWarning]) {
        for warning in warnings {
            if self.json {
                let _ = crate::ui::json::emit(crate::ui::json::warning_event(warning));
                continue;
            }
            eprintln!(
                "{} {}",
                self.icon(Icon::Warning, colors::HIGHLIGHT),
                warning
            );
        }
    }

    pub fn loaded(&self, path: &Path, working_dir: &Path) {
        self.info(format!("Loaded config from {}", path.display()));
        self.debug(format!("Resolving paths against {}", working_dir.display()));
    }

    pub fn validated(&self, config: &ValidatedConfig) {
        self.info(format!(
            "{} Config valid: {} volume(s), {} already installed plugin(s)",
            self.icon(Icon::Success, colors::SUCCESS),
            config.volumes.len(),
            config.already_installed.len()
        ));
    }
}

/// Human-readable overview of a validated config
pub fn summary(config: &ValidatedConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("Instance:  {}\n", config.instance_name));
    out.push_str(&format!("Port:      {}\n", config.container_port));

    out.push_str("Volumes:\n");
    if config.volumes.is_empty() {
        out.push_str("  (none)\n");
    }
    for volume in &config.volumes {
        out.push_str(&format!("  {}\n", volume.spec()));
    }

    out.push_str("Environment:\n");
    for (key, value) in &config.envvars {
        out.push_str(&format!("  {}={}\n", key, value));
    }

    out.push_str("Already installed:\n");
    if config.already_installed.is_empty() {
        out.push_str("  (none)\n");
    }
    for plugin in &config.already_installed {
        out.push_str(&format!("  {}\n", plugin));
    }
    out
}
