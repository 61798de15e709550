//! ChannelSequence - read-only time-ordered view over one source stream
//!
//! Pure data holder: the read cursor lives in the multiplexer, never here.

use crate::{ChannelRecord, ChannelTag, ConvertError, LegGeometry};

/// One channel's timestamps and parallel payload records, validated at
/// construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ChannelSequence {
    tag: ChannelTag,
    timestamps: Vec<f64>,
    records: Vec<ChannelRecord>,
}

impl ChannelSequence {
    /// Construct a sequence, enforcing the input-integrity preconditions:
    /// equal vector lengths, finite strictly increasing timestamps, every
    /// record of the channel's variant with geometry-conformant shape.
    ///
    /// # Errors
    /// `SourceIntegrity` on any violation; nothing is emitted downstream of
    /// a failed construction.
    pub fn new(
        tag: ChannelTag,
        timestamps: Vec<f64>,
        records: Vec<ChannelRecord>,
        geometry: &LegGeometry,
    ) -> Result<Self, ConvertError> {
        if timestamps.len() != records.len() {
            return Err(ConvertError::source_integrity(
                tag,
                format!(
                    "{} timestamps but {} records",
                    timestamps.len(),
                    records.len()
                ),
            ));
        }

        // Strictly increasing: an in-channel duplicate is an input error,
        // never a converter fault.
        for (i, window) in timestamps.windows(2).enumerate() {
            if window[1] <= window[0] {
                return Err(ConvertError::source_integrity(
                    tag,
                    format!(
                        "timestamps not strictly increasing at index {}: {} after {}",
                        i + 1,
                        window[1],
                        window[0]
                    ),
                ));
            }
        }
        if let Some(bad) = timestamps.iter().find(|t| !t.is_finite()) {
            return Err(ConvertError::source_integrity(
                tag,
                format!("non-finite timestamp {bad}"),
            ));
        }

        for record in &records {
            if record.tag() != tag {
                return Err(ConvertError::source_integrity(
                    tag,
                    format!("record variant belongs to channel '{}'", record.tag()),
                ));
            }
            record.check_shape(geometry)?;
        }

        Ok(Self {
            tag,
            timestamps,
            records,
        })
    }

    /// Channel identity.
    #[inline]
    pub fn tag(&self) -> ChannelTag {
        self.tag
    }

    /// Timestamp at the given cursor, or `None` past the end.
    #[inline]
    pub fn peek_timestamp(&self, cursor: usize) -> Option<f64> {
        self.timestamps.get(cursor).copied()
    }

    /// Record at the given cursor, or `None` past the end.
    #[inline]
    pub fn record_at(&self, cursor: usize) -> Option<&ChannelRecord> {
        self.records.get(cursor)
    }

    /// Number of samples in this channel.
    #[inline]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the channel carries no samples at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Full timestamp slice.
    #[inline]
    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imu_record() -> ChannelRecord {
        ChannelRecord::Imu {
            acc: [0.0, 0.0, 9.81],
            omega: [0.0; 3],
        }
    }

    fn geometry() -> LegGeometry {
        LegGeometry::new(4).unwrap()
    }

    #[test]
    fn test_construct_and_read() {
        let seq = ChannelSequence::new(
            ChannelTag::Imu,
            vec![0.0, 0.1],
            vec![imu_record(), imu_record()],
            &geometry(),
        )
        .unwrap();

        assert_eq!(seq.len(), 2);
        assert_eq!(seq.peek_timestamp(0), Some(0.0));
        assert_eq!(seq.peek_timestamp(1), Some(0.1));
        assert_eq!(seq.peek_timestamp(2), None);
        assert!(seq.record_at(0).is_some());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = ChannelSequence::new(
            ChannelTag::Imu,
            vec![0.0, 0.1],
            vec![imu_record()],
            &geometry(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::SourceIntegrity { .. }));
    }

    #[test]
    fn test_out_of_order_rejected_not_sorted() {
        let err = ChannelSequence::new(
            ChannelTag::Imu,
            vec![0.2, 0.1],
            vec![imu_record(), imu_record()],
            &geometry(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::SourceIntegrity { .. }));
    }

    #[test]
    fn test_wrong_variant_rejected() {
        let err = ChannelSequence::new(
            ChannelTag::GroundTruth,
            vec![0.0],
            vec![imu_record()],
            &geometry(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::SourceIntegrity { .. }));
    }

    #[test]
    fn test_duplicate_timestamps_rejected() {
        let seq = ChannelSequence::new(
            ChannelTag::Imu,
            vec![0.1, 0.1],
            vec![imu_record(), imu_record()],
            &geometry(),
        );
        assert!(matches!(seq, Err(ConvertError::SourceIntegrity { .. })));
    }
}
