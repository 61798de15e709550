//! TraceSink - logs event summaries via tracing

use contracts::{ConvertError, EventSink, LogEvent};
use tracing::{debug, info};

/// Sink that logs each appended event, for debugging a conversion without
/// touching disk.
pub struct TraceSink {
    name: String,
    appended: u64,
}

impl TraceSink {
    /// Create a new TraceSink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            appended: 0,
        }
    }

    /// Events seen so far.
    pub fn appended(&self) -> u64 {
        self.appended
    }
}

impl EventSink for TraceSink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn append(&mut self, event: LogEvent) -> Result<(), ConvertError> {
        self.appended += 1;
        debug!(
            sink = %self.name,
            channel = %event.channel,
            utime = event.utime,
            bytes = event.payload.len(),
            "event"
        );
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), ConvertError> {
        Ok(())
    }

    async fn close(&mut self) -> Result<(), ConvertError> {
        info!(sink = %self.name, events = self.appended, "TraceSink closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use contracts::ChannelTag;

    #[tokio::test]
    async fn test_trace_sink_counts() {
        let mut sink = TraceSink::new("test_trace");
        for i in 0..3 {
            sink.append(LogEvent {
                utime: i,
                channel: ChannelTag::Imu,
                payload: Bytes::new(),
            })
            .await
            .unwrap();
        }
        sink.close().await.unwrap();
        assert_eq!(sink.appended(), 3);
    }
}
