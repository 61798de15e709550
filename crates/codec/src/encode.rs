//! Record encoding - ChannelRecord to payload bytes

use bytes::{BufMut, Bytes, BytesMut};
use contracts::{ChannelRecord, ChannelTag, LegGeometry};

// Schema fingerprints, one per channel. Fixed constants: a reader checks the
// first 8 bytes of a payload against the fingerprint of the channel it
// expects before trusting the field layout.
const GROUND_TRUTH_FINGERPRINT: u64 = 0x8e3f_1c6a_92d4_b750;
const CONTACT_FORCES_FINGERPRINT: u64 = 0x4ba9_07e5_d1f2_386c;
const LEG_STATE_FINGERPRINT: u64 = 0xc25d_8f04_6ae1_93b7;
const IMU_FINGERPRINT: u64 = 0x17f6_b3c8_40e9_5a2d;

/// Schema fingerprint for a channel.
pub fn fingerprint(tag: ChannelTag) -> u64 {
    match tag {
        ChannelTag::GroundTruth => GROUND_TRUTH_FINGERPRINT,
        ChannelTag::ContactForces => CONTACT_FORCES_FINGERPRINT,
        ChannelTag::LegState => LEG_STATE_FINGERPRINT,
        ChannelTag::Imu => IMU_FINGERPRINT,
    }
}

/// Exact payload size for a channel under the given geometry.
pub fn encoded_len(tag: ChannelTag, geometry: &LegGeometry) -> usize {
    let nl = geometry.num_legs as usize;
    let nj = geometry.num_joints as usize;
    match tag {
        ChannelTag::GroundTruth => 8 + 1 + 8 + nl,
        ChannelTag::ContactForces => 8 + 1 + 8 + 2 * 8 * nj,
        ChannelTag::LegState => 8 + 1 + 8 + 5 * 8 * nj,
        ChannelTag::Imu => 8 + 8 + 6 * 8,
    }
}

/// Encode one record with its source timestamp into payload bytes.
///
/// Deterministic and total over records that passed
/// [`ChannelRecord::check_shape`]; the caller guarantees the shape check
/// already ran at sequence construction.
pub fn encode_record(timestamp: f64, record: &ChannelRecord, geometry: &LegGeometry) -> Bytes {
    let tag = record.tag();
    let mut buf = BytesMut::with_capacity(encoded_len(tag, geometry));
    buf.put_u64(fingerprint(tag));

    match record {
        ChannelRecord::GroundTruth { contact } => {
            buf.put_i8(geometry.num_legs as i8);
            buf.put_f64(timestamp);
            for &flag in contact {
                buf.put_i8(flag);
            }
        }
        ChannelRecord::ContactForces {
            tau_feed_back,
            tau_feed_forward,
        } => {
            buf.put_i8(geometry.num_joints as i8);
            buf.put_f64(timestamp);
            put_f64_slice(&mut buf, tau_feed_back);
            put_f64_slice(&mut buf, tau_feed_forward);
        }
        ChannelRecord::LegState { q, p, qd, v, tau_est } => {
            buf.put_i8(geometry.num_joints as i8);
            buf.put_f64(timestamp);
            put_f64_slice(&mut buf, q);
            put_f64_slice(&mut buf, p);
            put_f64_slice(&mut buf, qd);
            put_f64_slice(&mut buf, v);
            put_f64_slice(&mut buf, tau_est);
        }
        ChannelRecord::Imu { acc, omega } => {
            buf.put_f64(timestamp);
            put_f64_slice(&mut buf, acc);
            put_f64_slice(&mut buf, omega);
        }
    }

    buf.freeze()
}

#[inline]
fn put_f64_slice(buf: &mut BytesMut, values: &[f64]) {
    for &value in values {
        buf.put_f64(value);
    }
}
