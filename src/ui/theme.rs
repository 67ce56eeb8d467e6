//! Colors and icons for terminal output.
//!
//! All icons come from here so ASCII fallback stays consistent.

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    /// Field names and offending paths
    pub const HIGHLIGHT: Color = Color::Yellow;
    /// ftp entry numbers
    pub const INDEX: Color = Color::Green;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[ERROR]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
}

impl Icon {
    pub fn render(self, supports_unicode: bool) -> &'static str {
        match (self, supports_unicode) {
            (Icon::Success, true) => icons::SUCCESS,
            (Icon::Success, false) => icons_ascii::SUCCESS,
            (Icon::Error, true) => icons::ERROR,
            (Icon::Error, false) => icons_ascii::ERROR,
            (Icon::Warning, true) => icons::WARNING,
            (Icon::Warning, false) => icons_ascii::WARNING,
            (Icon::Arrow, true) => icons::ARROW,
            (Icon::Arrow, false) => icons_ascii::ARROW,
        }
    }
}

/// Apply `color` to `text` when the terminal supports it
pub fn paint(text: impl std::fmt::Display, color: Color, supports_color: bool) -> String {
    use crossterm::style::Stylize;

    if supports_color {
        text.to_string().with(color).to_string()
    } else {
        text.to_string()
    }
}
