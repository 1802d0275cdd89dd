//! Event Sink Implementations
//!
//! Provides concrete implementations of BuildEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable progress

mod console;
mod json;

pub use console::{ConsoleEventSink, ConsoleStyle};
pub use json::{event_to_json, JsonEventSink};
