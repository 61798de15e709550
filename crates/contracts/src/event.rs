//! LogEvent - Multiplexer output
//!
//! Built transiently per emission and handed straight to the sink.

use bytes::Bytes;

use crate::ChannelTag;

/// One multiplexed event headed for the log.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// Absolute log time key in microseconds: `epoch + round(t * 1e6)`
    pub utime: i64,

    /// Originating channel
    pub channel: ChannelTag,

    /// Encoded payload bytes (zero-copy)
    pub payload: Bytes,
}
