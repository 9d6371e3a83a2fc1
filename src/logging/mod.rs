//! Structured JSON logging for cycle output and audit.

mod format;

pub use format::{LogEvent, StructuredLogger};
