//! Record decoding - payload bytes back to (timestamp, ChannelRecord)
//!
//! Used by verification tooling and tests; the conversion pass itself only
//! encodes.

use bytes::Buf;
use contracts::{ChannelRecord, ChannelTag, ConvertError, LegGeometry};

use crate::encode::{encoded_len, fingerprint};

/// Decode one payload for the given channel.
///
/// # Errors
/// `RecordingParse` on short payloads or fingerprint mismatch.
pub fn decode_record(
    tag: ChannelTag,
    geometry: &LegGeometry,
    payload: &[u8],
) -> Result<(f64, ChannelRecord), ConvertError> {
    let want = encoded_len(tag, geometry);
    if payload.len() != want {
        return Err(ConvertError::recording_parse(format!(
            "channel '{tag}': payload is {} bytes, expected {want}",
            payload.len()
        )));
    }

    let mut buf = payload;
    let fp = buf.get_u64();
    if fp != fingerprint(tag) {
        return Err(ConvertError::recording_parse(format!(
            "channel '{tag}': fingerprint {fp:#018x} does not match schema"
        )));
    }

    let nl = geometry.num_legs as usize;
    let nj = geometry.num_joints as usize;
    match tag {
        ChannelTag::GroundTruth => {
            let count = buf.get_i8();
            check_count(tag, count, geometry.num_legs)?;
            let timestamp = buf.get_f64();
            let contact = (0..nl).map(|_| buf.get_i8()).collect();
            Ok((timestamp, ChannelRecord::GroundTruth { contact }))
        }
        ChannelTag::ContactForces => {
            let count = buf.get_i8();
            check_count(tag, count, geometry.num_joints)?;
            let timestamp = buf.get_f64();
            let record = ChannelRecord::ContactForces {
                tau_feed_back: get_f64_vec(&mut buf, nj),
                tau_feed_forward: get_f64_vec(&mut buf, nj),
            };
            Ok((timestamp, record))
        }
        ChannelTag::LegState => {
            let count = buf.get_i8();
            check_count(tag, count, geometry.num_joints)?;
            let timestamp = buf.get_f64();
            let record = ChannelRecord::LegState {
                q: get_f64_vec(&mut buf, nj),
                p: get_f64_vec(&mut buf, nj),
                qd: get_f64_vec(&mut buf, nj),
                v: get_f64_vec(&mut buf, nj),
                tau_est: get_f64_vec(&mut buf, nj),
            };
            Ok((timestamp, record))
        }
        ChannelTag::Imu => {
            let timestamp = buf.get_f64();
            let mut acc = [0.0; 3];
            let mut omega = [0.0; 3];
            for slot in &mut acc {
                *slot = buf.get_f64();
            }
            for slot in &mut omega {
                *slot = buf.get_f64();
            }
            Ok((timestamp, ChannelRecord::Imu { acc, omega }))
        }
    }
}

fn check_count(tag: ChannelTag, got: i8, want: u8) -> Result<(), ConvertError> {
    if got == want as i8 {
        Ok(())
    } else {
        Err(ConvertError::recording_parse(format!(
            "channel '{tag}': count byte {got} does not match geometry {want}"
        )))
    }
}

fn get_f64_vec(buf: &mut &[u8], n: usize) -> Vec<f64> {
    (0..n).map(|_| buf.get_f64()).collect()
}
