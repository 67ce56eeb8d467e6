use std::io::{self, Write};

use serde_json::json;

use wpdock::config::{ConfigWarning, ValidatedConfig};
use wpdock::error::{ValidationError, WpdockError};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn warning_event(warning: &ConfigWarning) -> serde_json::Value {
    json!({
        "event": "warning",
        "kind": "unknown_key",
        "key": warning.key,
        "file": warning.file.display().to_string(),
        "line": warning.line,
        "suggestion": warning.suggestion,
    })
}

pub fn result_event(config: &ValidatedConfig) -> serde_json::Value {
    json!({
        "event": "result",
        "config": config,
    })
}

pub fn args_event(config: &ValidatedConfig) -> serde_json::Value {
    json!({
        "event": "args",
        "args": config.runtime_args(),
    })
}

pub fn error_event(err: &anyhow::Error) -> serde_json::Value {
    let mut event = json!({
        "event": "error",
        "message": err.to_string(),
    });

    if let Some(WpdockError::Validation(validation)) = err.downcast_ref::<WpdockError>() {
        event["code"] = json!(validation.code());
        event["field"] = json!(validation.field());
        match validation {
            ValidationError::MissingRequiredField { index, .. }
            | ValidationError::WrongFieldType { index, .. } => {
                if let Some(index) = index {
                    event["ftpIndex"] = json!(index);
                }
            }
            ValidationError::PathNotFound { path, .. } => {
                event["path"] = json!(path.display().to_string());
            }
        }
    }
    event
}
