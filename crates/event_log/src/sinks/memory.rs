//! MemorySink - in-process event capture for tests

use contracts::{ConvertError, EventSink, LogEvent};

/// Sink that keeps every appended event in order, in memory.
#[derive(Default)]
pub struct MemorySink {
    events: Vec<LogEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured events, in append order.
    pub fn events(&self) -> &[LogEvent] {
        &self.events
    }

    /// Consume the sink, returning the captured events.
    pub fn into_events(self) -> Vec<LogEvent> {
        self.events
    }
}

impl EventSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    async fn append(&mut self, event: LogEvent) -> Result<(), ConvertError> {
        self.events.push(event);
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), ConvertError> {
        Ok(())
    }

    async fn close(&mut self) -> Result<(), ConvertError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use contracts::ChannelTag;

    #[tokio::test]
    async fn test_memory_sink_preserves_order() {
        let mut sink = MemorySink::new();
        for utime in [10, 20, 30] {
            sink.append(LogEvent {
                utime,
                channel: ChannelTag::LegState,
                payload: Bytes::new(),
            })
            .await
            .unwrap();
        }

        let utimes: Vec<i64> = sink.events().iter().map(|e| e.utime).collect();
        assert_eq!(utimes, vec![10, 20, 30]);
    }
}
