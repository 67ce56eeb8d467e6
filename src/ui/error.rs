use std::path::Path;

use wpdock::error::{expected_shape, PathKind, ValidationError, WpdockError};

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::{colors, paint, Icon};

/// Render a validation error as one line, highlighting the offending field
pub fn format_validation_error(err: &ValidationError, supports_color: bool) -> String {
    let field = |name: &str| paint(name, colors::HIGHLIGHT, supports_color);
    let index = |i: usize| paint(i, colors::INDEX, supports_color);

    match err {
        ValidationError::MissingRequiredField { field: name, index: None } => {
            format!("{} is not defined in your config.", field(*name))
        }
        ValidationError::MissingRequiredField { field: name, index: Some(i) } => format!(
            "The {} key for ftp config {} is not defined.",
            field(*name),
            index(*i)
        ),
        ValidationError::WrongFieldType { field: name, index: None } => format!(
            "{} is defined in your config but it is not {}.",
            field(*name),
            expected_shape(*name)
        ),
        ValidationError::WrongFieldType { field: name, index: Some(i) } => format!(
            "The {} key for ftp config {} is defined but not {}.",
            field(*name),
            index(*i),
            expected_shape(*name)
        ),
        ValidationError::PathNotFound { kind, path } => {
            let color = match kind {
                PathKind::DatabaseDump => colors::INFO,
                PathKind::Plugin | PathKind::Theme => colors::HIGHLIGHT,
            };
            format!(
                "{} at '{}' does not exist.",
                kind.label(),
                paint(path.display(), color, supports_color)
            )
        }
    }
}

fn format_error_with(err: &anyhow::Error, caps: TerminalCapabilities) -> String {
    let validation = match err.downcast_ref::<WpdockError>() {
        Some(WpdockError::Validation(validation)) => Some(validation),
        _ => err.downcast_ref::<ValidationError>(),
    };
    let message = match validation {
        Some(validation) => format_validation_error(validation, caps.supports_color),
        None => err.to_string(),
    };
    format!(
        "{} {}\n",
        paint(
            Icon::Error.render(caps.supports_unicode),
            colors::ERROR,
            caps.supports_color
        ),
        message
    )
}

/// Emit the single diagnostic for a failed run.
///
/// JSON mode writes one `error` event to stdout. Otherwise one line goes to
/// stderr; under GitHub Actions that line is a workflow annotation carrying
/// `config_file` when known.
pub fn print_error(err: &anyhow::Error, json: bool, config_file: Option<&Path>) {
    if json {
        let _ = crate::ui::json::emit(crate::ui::json::error_event(err));
        return;
    }

    eprint!("{}", diagnostic(err, config_file, detect_capabilities()));
}

fn diagnostic(
    err: &anyhow::Error,
    config_file: Option<&Path>,
    caps: TerminalCapabilities,
) -> String {
    if !caps.is_github_actions {
        return format_error_with(err, caps);
    }
    let file = err
        .downcast_ref::<WpdockError>()
        .and_then(WpdockError::file)
        .or(config_file);
    format!(
        "{}\n",
        crate::ui::ci::github_error_annotation(&err.to_string(), file)
    )
}
