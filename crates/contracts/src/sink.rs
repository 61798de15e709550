//! EventSink trait - append-only log output interface
//!
//! Defines the abstract interface for sinks. The multiplexer owns the sink
//! exclusively for the whole pass; call order is the persistence order.

use crate::{ConvertError, LogEvent};

/// Append-only event output trait
///
/// All sink implementations must implement this trait.
#[trait_variant::make(EventSink: Send)]
pub trait LocalEventSink {
    /// Sink name (used for logging/errors)
    fn name(&self) -> &str;

    /// Append one event; the sink must persist events in call order
    ///
    /// # Errors
    /// Returns write error; a failed append aborts the pass and leaves the
    /// log possibly incomplete (the sink is not transactional)
    async fn append(&mut self, event: LogEvent) -> Result<(), ConvertError>;

    /// Flush buffered output (if any)
    async fn flush(&mut self) -> Result<(), ConvertError>;

    /// Close the sink
    async fn close(&mut self) -> Result<(), ConvertError>;
}
