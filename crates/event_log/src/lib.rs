//! # Event Log
//!
//! Append-only log output module.
//!
//! Responsibilities:
//! - Persist multiplexed events in call order
//! - `LcmLogSink`: the on-disk event-log container
//! - `TraceSink`: structured-log summaries for debugging
//! - `MemorySink`: in-process capture for tests

pub mod sinks;

pub use contracts::{EventSink, LogEvent};
pub use sinks::{read_log, LcmLogSink, LoggedEvent, MemorySink, TraceSink};
