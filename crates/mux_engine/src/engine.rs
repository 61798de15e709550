//! Main multiplexer implementation.
//!
//! Single forward pass over the global timeline. Per-channel state is a
//! small cursor/exhaustion record in a fixed arena indexed by channel tag;
//! the state machine per channel is `Pending(0) -> .. -> Pending(len-1) ->
//! Exhausted`, monotonic, never reset.

use contracts::{
    ChannelCompleteCallback, ChannelSequence, ChannelTag, ConvertError, EventSink, LegGeometry,
    LogEvent,
};
use tracing::{debug, info, instrument};

use crate::timeline::build_timeline;

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// One channel's read state during the pass.
#[derive(Debug)]
struct ChannelSlot {
    sequence: ChannelSequence,
    cursor: usize,
    exhausted: bool,
}

/// Per-pass emission statistics.
#[derive(Debug, Clone, Default)]
pub struct MuxStats {
    /// Events emitted per channel, in `ChannelTag::ALL` order
    emitted: [u64; ChannelTag::ALL.len()],

    /// Distinct timestamps visited
    pub timeline_entries: u64,
}

impl MuxStats {
    /// Events emitted for one channel.
    pub fn events_for(&self, tag: ChannelTag) -> u64 {
        self.emitted[tag.index()]
    }

    /// Total events emitted across all channels.
    pub fn total_events(&self) -> u64 {
        self.emitted.iter().sum()
    }
}

/// The event multiplexer: drives the timeline walk and owns all per-channel
/// cursor state. Consumed by [`Multiplexer::run`]; the sequences are
/// discarded once the pass completes.
pub struct Multiplexer {
    slots: [Option<ChannelSlot>; ChannelTag::ALL.len()],
    geometry: LegGeometry,
    epoch_micros: i64,
    on_complete: Option<ChannelCompleteCallback>,
}

impl std::fmt::Debug for Multiplexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Multiplexer")
            .field("slots", &self.slots)
            .field("geometry", &self.geometry)
            .field("epoch_micros", &self.epoch_micros)
            .finish_non_exhaustive()
    }
}

impl Multiplexer {
    /// Build a multiplexer over the given sequences.
    ///
    /// Channels may appear at most once; a channel without a sequence simply
    /// contributes no events. Zero-length sequences start exhausted.
    ///
    /// # Errors
    /// `SourceIntegrity` if two sequences claim the same channel.
    pub fn new(
        sequences: Vec<ChannelSequence>,
        geometry: LegGeometry,
        epoch_micros: i64,
    ) -> Result<Self, ConvertError> {
        let mut slots: [Option<ChannelSlot>; ChannelTag::ALL.len()] = Default::default();

        for sequence in sequences {
            let tag = sequence.tag();
            let slot = &mut slots[tag.index()];
            if slot.is_some() {
                return Err(ConvertError::source_integrity(
                    tag,
                    "two sequences supplied for the same channel",
                ));
            }
            *slot = Some(ChannelSlot {
                exhausted: sequence.is_empty(),
                sequence,
                cursor: 0,
            });
        }

        Ok(Self {
            slots,
            geometry,
            epoch_micros,
            on_complete: None,
        })
    }

    /// Register an advisory completion observer, fired exactly once per
    /// channel when it transitions to exhausted.
    pub fn with_completion_observer(mut self, callback: ChannelCompleteCallback) -> Self {
        self.on_complete = Some(callback);
        self
    }

    /// Run the full multiplexing pass into the sink.
    ///
    /// Strictly serial: each append is awaited before the next event is
    /// built, so sink call order is emission order.
    ///
    /// # Errors
    /// - `SinkWrite`/`Io` from the sink, aborting immediately (the log is
    ///   then possibly incomplete)
    /// - `Consistency` if any channel fails to exhaust by timeline end
    #[instrument(name = "mux_run", skip(self, sink), fields(epoch_micros = self.epoch_micros))]
    pub async fn run<S: EventSink>(mut self, sink: &mut S) -> Result<MuxStats, ConvertError> {
        let channels = self.slots.iter().flatten().count();
        let timeline = build_timeline(self.slots.iter().flatten().map(|slot| &slot.sequence));

        info!(channels, entries = timeline.len(), "timeline built");

        // Empty channels never produce events; report them complete before
        // the walk starts.
        for tag in ChannelTag::ALL {
            if let Some(slot) = &self.slots[tag.index()] {
                if slot.exhausted {
                    self.report_complete(tag, 0);
                }
            }
        }

        let mut stats = MuxStats {
            timeline_entries: timeline.len() as u64,
            ..Default::default()
        };

        self.emit_pass(&timeline, sink, &mut stats).await?;
        self.check_all_exhausted()?;

        info!(
            events = stats.total_events(),
            entries = stats.timeline_entries,
            "multiplexing pass complete"
        );
        Ok(stats)
    }

    /// The timeline walk itself. Channels are visited in `ChannelTag::ALL`
    /// order at every entry, which fixes the tie order for timestamps shared
    /// across channels.
    async fn emit_pass<S: EventSink>(
        &mut self,
        timeline: &[f64],
        sink: &mut S,
        stats: &mut MuxStats,
    ) -> Result<(), ConvertError> {
        for &t in timeline {
            for tag in ChannelTag::ALL {
                let Some(slot) = &mut self.slots[tag.index()] else {
                    continue;
                };
                if slot.exhausted {
                    continue;
                }
                // Exact equality: both values come verbatim from the same
                // source vector, no tolerance is introduced anywhere.
                if slot.sequence.peek_timestamp(slot.cursor) != Some(t) {
                    continue;
                }

                let record = slot.sequence.record_at(slot.cursor).ok_or_else(|| {
                    ConvertError::consistency(format!(
                        "channel '{tag}' cursor {} has a timestamp but no record",
                        slot.cursor
                    ))
                })?;

                let payload = codec::encode_record(t, record, &self.geometry);
                let utime = self.epoch_micros + (t * MICROS_PER_SECOND).round() as i64;

                sink.append(LogEvent {
                    utime,
                    channel: tag,
                    payload,
                })
                .await?;

                stats.emitted[tag.index()] += 1;
                metrics::counter!("mux_events_emitted", "channel" => tag.as_str()).increment(1);

                slot.cursor += 1;
                if slot.cursor == slot.sequence.len() {
                    slot.exhausted = true;
                    let emitted = stats.emitted[tag.index()];
                    self.report_complete(tag, emitted);
                }
            }
        }
        Ok(())
    }

    /// Post-pass invariant: the timeline is the union of all channel
    /// timestamps, so every channel must have drained. Anything else is a
    /// converter bug, not bad input.
    fn check_all_exhausted(&self) -> Result<(), ConvertError> {
        for tag in ChannelTag::ALL {
            if let Some(slot) = &self.slots[tag.index()] {
                if !slot.exhausted {
                    return Err(ConvertError::consistency(format!(
                        "channel '{tag}' stopped at cursor {} of {} after timeline end",
                        slot.cursor,
                        slot.sequence.len()
                    )));
                }
            }
        }
        Ok(())
    }

    fn report_complete(&self, tag: ChannelTag, events: u64) {
        debug!(channel = %tag, events, "channel complete");
        metrics::counter!("mux_channels_completed").increment(1);
        if let Some(callback) = &self.on_complete {
            callback(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::ChannelRecord;
    use std::sync::{Arc, Mutex};

    /// Sink that records every append in order.
    #[derive(Default)]
    struct CaptureSink {
        events: Vec<LogEvent>,
        fail_after: Option<usize>,
    }

    impl EventSink for CaptureSink {
        fn name(&self) -> &str {
            "capture"
        }

        async fn append(&mut self, event: LogEvent) -> Result<(), ConvertError> {
            if let Some(limit) = self.fail_after {
                if self.events.len() >= limit {
                    return Err(ConvertError::sink_write("capture", "disk full"));
                }
            }
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

    fn geometry() -> LegGeometry {
        LegGeometry::new(4).unwrap()
    }

    fn ground_truth(timestamps: Vec<f64>) -> ChannelSequence {
        let records = timestamps
            .iter()
            .map(|_| ChannelRecord::GroundTruth {
                contact: vec![1, 1, 0, 0],
            })
            .collect();
        ChannelSequence::new(ChannelTag::GroundTruth, timestamps, records, &geometry()).unwrap()
    }

    fn contact_forces(timestamps: Vec<f64>) -> ChannelSequence {
        let records = timestamps
            .iter()
            .map(|_| ChannelRecord::ContactForces {
                tau_feed_back: vec![0.0; 12],
                tau_feed_forward: vec![0.0; 12],
            })
            .collect();
        ChannelSequence::new(ChannelTag::ContactForces, timestamps, records, &geometry()).unwrap()
    }

    #[tokio::test]
    async fn test_interleaving_and_tie_order() {
        // A=[0.0, 0.1, 0.2], B=[0.1, 0.3] => A@0.0, A@0.1, B@0.1, A@0.2, B@0.3
        let mux = Multiplexer::new(
            vec![
                ground_truth(vec![0.0, 0.1, 0.2]),
                contact_forces(vec![0.1, 0.3]),
            ],
            geometry(),
            0,
        )
        .unwrap();

        let mut sink = CaptureSink::default();
        let stats = mux.run(&mut sink).await.unwrap();

        let order: Vec<(ChannelTag, i64)> = sink
            .events
            .iter()
            .map(|e| (e.channel, e.utime))
            .collect();
        assert_eq!(
            order,
            vec![
                (ChannelTag::GroundTruth, 0),
                (ChannelTag::GroundTruth, 100_000),
                (ChannelTag::ContactForces, 100_000),
                (ChannelTag::GroundTruth, 200_000),
                (ChannelTag::ContactForces, 300_000),
            ]
        );
        assert_eq!(stats.total_events(), 5);
        assert_eq!(stats.events_for(ChannelTag::GroundTruth), 3);
        assert_eq!(stats.events_for(ChannelTag::ContactForces), 2);
        assert_eq!(stats.timeline_entries, 4);
    }

    #[tokio::test]
    async fn test_utimes_non_decreasing_and_epoch_anchored() {
        let mux = Multiplexer::new(
            vec![ground_truth(vec![0.5, 1.0]), contact_forces(vec![0.75])],
            geometry(),
            1_700_000_000_000_000,
        )
        .unwrap();

        let mut sink = CaptureSink::default();
        mux.run(&mut sink).await.unwrap();

        let utimes: Vec<i64> = sink.events.iter().map(|e| e.utime).collect();
        assert!(utimes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(utimes[0], 1_700_000_000_500_000);
    }

    #[tokio::test]
    async fn test_completeness_per_channel() {
        let mux = Multiplexer::new(
            vec![
                ground_truth(vec![0.0, 0.2, 0.4]),
                contact_forces(vec![0.1, 0.2, 0.3, 0.5]),
            ],
            geometry(),
            0,
        )
        .unwrap();

        let mut sink = CaptureSink::default();
        let stats = mux.run(&mut sink).await.unwrap();

        assert_eq!(stats.events_for(ChannelTag::GroundTruth), 3);
        assert_eq!(stats.events_for(ChannelTag::ContactForces), 4);
        assert_eq!(sink.events.len(), 7);
    }

    #[tokio::test]
    async fn test_empty_channel_completes_with_zero_events() {
        let completed: Arc<Mutex<Vec<ChannelTag>>> = Arc::new(Mutex::new(Vec::new()));
        let seen = completed.clone();

        let mux = Multiplexer::new(
            vec![ground_truth(vec![]), contact_forces(vec![0.1])],
            geometry(),
            0,
        )
        .unwrap()
        .with_completion_observer(Arc::new(move |tag| {
            seen.lock().unwrap().push(tag);
        }));

        let mut sink = CaptureSink::default();
        let stats = mux.run(&mut sink).await.unwrap();

        assert_eq!(stats.events_for(ChannelTag::GroundTruth), 0);
        assert_eq!(stats.events_for(ChannelTag::ContactForces), 1);
        // Empty channel reported complete first, each channel exactly once
        let completed = completed.lock().unwrap();
        assert_eq!(
            *completed,
            vec![ChannelTag::GroundTruth, ChannelTag::ContactForces]
        );
    }

    #[tokio::test]
    async fn test_sink_error_aborts_pass() {
        let mux = Multiplexer::new(
            vec![ground_truth(vec![0.0, 0.1, 0.2])],
            geometry(),
            0,
        )
        .unwrap();

        let mut sink = CaptureSink {
            fail_after: Some(1),
            ..Default::default()
        };
        let err = mux.run(&mut sink).await.unwrap_err();
        assert!(matches!(err, ConvertError::SinkWrite { .. }));
        assert_eq!(sink.events.len(), 1);
    }

    #[tokio::test]
    async fn test_truncated_timeline_is_consistency_fault() {
        let mut mux = Multiplexer::new(
            vec![ground_truth(vec![0.0, 0.1])],
            geometry(),
            0,
        )
        .unwrap();

        let mut sink = CaptureSink::default();
        let mut stats = MuxStats::default();
        // Walk a timeline missing the 0.1 entry, then run the post-pass check
        mux.emit_pass(&[0.0], &mut sink, &mut stats).await.unwrap();
        let err = mux.check_all_exhausted().unwrap_err();
        assert!(matches!(err, ConvertError::Consistency { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_channel_rejected() {
        let err = Multiplexer::new(
            vec![ground_truth(vec![0.0]), ground_truth(vec![0.1])],
            geometry(),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::SourceIntegrity { .. }));
    }

    #[tokio::test]
    async fn test_deterministic_across_runs() {
        let build = || {
            Multiplexer::new(
                vec![
                    ground_truth(vec![0.1, 0.2]),
                    contact_forces(vec![0.1, 0.2]),
                ],
                geometry(),
                0,
            )
            .unwrap()
        };

        let mut first = CaptureSink::default();
        build().run(&mut first).await.unwrap();
        let mut second = CaptureSink::default();
        build().run(&mut second).await.unwrap();

        let order = |sink: &CaptureSink| -> Vec<(ChannelTag, i64)> {
            sink.events.iter().map(|e| (e.channel, e.utime)).collect()
        };
        assert_eq!(order(&first), order(&second));
    }
}
