//! NDJSON event types emitted by `shapes --json`.
//!
//! A run is `start`, the command's measurements (`sum`, `shape`, `volume`),
//! then `complete`. A failed run puts one `error` before a `complete` with
//! `success: false`.

use serde::Serialize;

/// First line of every run: which command, on how many shape inputs.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub inputs: usize,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, inputs: usize) -> Self {
        Self {
            event: "start",
            command,
            inputs,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Last line of every run.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub duration_ms: u64,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(command: &'a str, success: bool, duration_ms: u64) -> Self {
        Self {
            event: "complete",
            command,
            success,
            duration_ms,
        }
    }
}

/// Why a run failed. `code` is `ShapeError::code()` for library errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'static str,
    pub message: String,
    /// How to write a valid shape or config, when that is the problem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(
        command: &'a str,
        code: &'static str,
        message: impl Into<String>,
        help: Option<&'static str>,
    ) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            help,
        }
    }
}

/// A measurement line; `data` fields sit next to `event` and `command`.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(event: &'static str, command: &'a str, data: T) -> Self {
        Self {
            event,
            command,
            data,
        }
    }
}
