//! Core logic behind the command-line tools.
//!
//! - `history-undo` — revert a group of history items against a state document
//! - `tween-sample` — print the frames a tween produces at a fixed frame rate

use std::io;

use serde_json::{json, Value};

use crate::history::{apply_history_items, from_json_items, ApplyOptions};
use crate::tween::{easing_by_name, Tween, TweenStep, TweenValue};

pub const DEFAULT_FPS: f64 = 60.0;

/// Upper bound on the frames `tween-sample` will produce for one tween.
pub const MAX_SAMPLED_FRAMES: u64 = 1_000_000;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Io(io::Error),
    History(String),
    Tween(String),
    BadArgument(String),
    UnknownEasing(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e)          => write!(f, "{e}"),
            CliError::Io(e)            => write!(f, "{e}"),
            CliError::History(e)       => write!(f, "{e}"),
            CliError::Tween(e)         => write!(f, "{e}"),
            CliError::BadArgument(e)   => write!(f, "Bad argument: {e}"),
            CliError::UnknownEasing(e) => write!(f, "Unknown easing: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self { CliError::Json(e) }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self { CliError::Io(e) }
}

// ── history-undo ──────────────────────────────────────────────────────────

/// Revert a group of history items against a document.
///
/// `doc_json`: the state document as a JSON string.
/// `items_json`: the history items as a JSON array string, oldest first.
///
/// Items are reverted newest first and all-or-nothing. Returns the reverted
/// document as a pretty-printed JSON string.
pub fn undo_history_json(doc_json: &str, items_json: &str) -> Result<String, CliError> {
    let mut doc: Value = serde_json::from_str(doc_json)?;
    let items_raw: Value = serde_json::from_str(items_json)?;
    let items = from_json_items(&items_raw)
        .map_err(|e| CliError::History(e.to_string()))?;
    apply_history_items(&mut doc, &items, &ApplyOptions { atomic: true })
        .map_err(|e| CliError::History(e.to_string()))?;
    Ok(serde_json::to_string_pretty(&doc)?)
}

// ── tween-sample ──────────────────────────────────────────────────────────

/// Parse a tween endpoint: a JSON number or an array of numbers.
pub fn parse_tween_value(arg: &str) -> Result<TweenValue, CliError> {
    match serde_json::from_str::<Value>(arg)? {
        Value::Number(n) => n
            .as_f64()
            .map(TweenValue::Scalar)
            .ok_or_else(|| CliError::BadArgument(arg.to_string())),
        Value::Array(items) => items
            .iter()
            .map(|v| v.as_f64().ok_or_else(|| CliError::BadArgument(arg.to_string())))
            .collect::<Result<Vec<_>, _>>()
            .map(TweenValue::Vector),
        _ => Err(CliError::BadArgument(arg.to_string())),
    }
}

/// Sample a tween at `fps` frames per second.
///
/// Each frame is handed to `emit` as one compact JSON line,
/// `{"t": <ms>, "value": ..}`, as soon as it is produced; the last carries
/// exactly `end`. Returns the number of frames emitted.
///
/// Tweens that would need more than [`MAX_SAMPLED_FRAMES`] frames are
/// rejected before anything is emitted.
pub fn sample_tween(
    start: &str,
    end: &str,
    duration: f64,
    fps: f64,
    easing: &str,
    mut emit: impl FnMut(&str) -> Result<(), CliError>,
) -> Result<u64, CliError> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(CliError::BadArgument(format!("fps must be positive, got {fps}")));
    }
    let easing = easing_by_name(easing)
        .ok_or_else(|| CliError::UnknownEasing(easing.to_string()))?;
    let mut tween = Tween::new(parse_tween_value(start)?, parse_tween_value(end)?, duration)
        .map_err(|e| CliError::Tween(e.to_string()))?
        .with_easing(easing);

    let frame_ms = 1000.0 / fps;
    let needed = (duration / frame_ms).ceil() + 1.0;
    if needed > MAX_SAMPLED_FRAMES as f64 {
        return Err(CliError::BadArgument(format!(
            "{needed} frames exceed the limit of {MAX_SAMPLED_FRAMES}"
        )));
    }

    let mut frame: u64 = 0;
    while let Some(step) = tween.advance(frame as f64 * frame_ms) {
        let t = frame as f64 * frame_ms;
        emit(&serde_json::to_string(&json!({ "t": t, "value": step.value() }))?)?;
        frame += 1;
        if let TweenStep::Done(_) = step {
            break;
        }
    }
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_reverts_items_in_reverse() {
        let doc = r#"{"layers": [{"id": 1, "scale": 2}]}"#;
        let items = r#"[
            {"kind": "inserted", "path": ["layers", 0], "value": {"id": 1, "scale": 1}, "findBy": {"id": 1}},
            {"kind": "set", "path": ["layers", 0, "scale"], "oldValue": 1, "newValue": 2}
        ]"#;
        let out: Value = serde_json::from_str(&undo_history_json(doc, items).unwrap()).unwrap();
        assert_eq!(out, json!({"layers": []}));
    }

    #[test]
    fn undo_reports_bad_items() {
        let err = undo_history_json("{}", r#"[{"kind": "set", "path": ["a"]}]"#).unwrap_err();
        assert!(matches!(err, CliError::History(_)));
        assert!(matches!(undo_history_json("{", "[]"), Err(CliError::Json(_))));
    }

    fn collect(start: &str, end: &str, duration: f64, fps: f64, easing: &str) -> Result<Vec<String>, CliError> {
        let mut lines = Vec::new();
        let count = sample_tween(start, end, duration, fps, easing, |line| {
            lines.push(line.to_string());
            Ok(())
        })?;
        assert_eq!(count, lines.len() as u64);
        Ok(lines)
    }

    #[test]
    fn samples_until_end() {
        let lines = collect("0", "10", 100.0, 20.0, "linear").unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], r#"{"t":0.0,"value":0.0}"#);
        assert_eq!(lines[1], r#"{"t":50.0,"value":5.0}"#);
        assert_eq!(lines[2], r#"{"t":100.0,"value":10.0}"#);
    }

    #[test]
    fn samples_vectors() {
        let lines = collect("[0, 0]", "[2, 4]", 10.0, 100.0, "default").unwrap();
        assert_eq!(lines.last().map(String::as_str), Some(r#"{"t":10.0,"value":[2.0,4.0]}"#));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(collect("0", "1", 10.0, 60.0, "bounce"), Err(CliError::UnknownEasing(_))));
        assert!(matches!(collect("0", "[1]", 10.0, 60.0, "linear"), Err(CliError::Tween(_))));
        assert!(matches!(collect("\"a\"", "1", 10.0, 60.0, "linear"), Err(CliError::BadArgument(_))));
        assert!(matches!(collect("0", "1", 10.0, 0.0, "linear"), Err(CliError::BadArgument(_))));
    }

    #[test]
    fn rejects_oversized_runs_before_emitting() {
        let mut emitted = 0;
        let err = sample_tween("0", "1", 1.0e12, 1000.0, "linear", |_| {
            emitted += 1;
            Ok(())
        })
        .unwrap_err();
        assert!(matches!(err, CliError::BadArgument(msg) if msg.contains("limit")));
        assert_eq!(emitted, 0);
    }

    #[test]
    fn emit_errors_stop_sampling() {
        let mut emitted = 0;
        let err = sample_tween("0", "1", 1000.0, 60.0, "linear", |_| {
            emitted += 1;
            Err(CliError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "closed")))
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(emitted, 1);
    }
}
