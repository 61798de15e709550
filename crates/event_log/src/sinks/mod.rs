//! Sink implementations
//!
//! Contains LcmLogSink, TraceSink, and MemorySink.

mod file;
mod log;
mod memory;

pub use self::file::{read_log, LcmLogSink, LoggedEvent};
pub use self::log::TraceSink;
pub use self::memory::MemorySink;
