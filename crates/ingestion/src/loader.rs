//! Recording loading and sequence construction.

use std::path::Path;

use contracts::{ChannelRecord, ChannelSequence, ChannelTag, ConvertError, LegGeometry};
use tracing::{debug, info};

use crate::container::RawRecording;

/// Read and parse a recording container from disk.
///
/// # Errors
/// - `Io` on read failure
/// - `RecordingParse` on malformed JSON or missing arrays
pub fn load_recording(path: &Path) -> Result<RawRecording, ConvertError> {
    debug!(path = %path.display(), "reading recording container");
    let content = std::fs::read_to_string(path)?;
    let recording: RawRecording = serde_json::from_str(&content).map_err(|e| {
        ConvertError::recording_parse(format!("{}: {e}", path.display()))
    })?;

    info!(
        path = %path.display(),
        samples = recording.total_samples(),
        "recording loaded"
    );
    Ok(recording)
}

/// Zip the raw arrays into one validated sequence per channel.
///
/// Always yields all four channels, in `ChannelTag::ALL` order; channels
/// with no samples become empty sequences. All input-integrity checking
/// happens inside `ChannelSequence::new`, before any event is emitted.
///
/// # Errors
/// `SourceIntegrity` on length mismatch, non-monotonic timestamps, or
/// record shapes that disagree with the geometry.
pub fn build_sequences(
    recording: RawRecording,
    geometry: &LegGeometry,
) -> Result<Vec<ChannelSequence>, ConvertError> {
    let RawRecording {
        mocap_t,
        contact_labels,
        contact_t,
        lcm_tau_fb,
        lcm_tau_ff,
        legcontrol_t,
        lcm_q,
        lcm_p,
        lcm_qd,
        lcm_v,
        lcm_tau_est,
        imu_t,
        lcm_acc,
        lcm_gyro,
    } = recording;

    let ground_truth = ChannelSequence::new(
        ChannelTag::GroundTruth,
        mocap_t,
        contact_labels
            .into_iter()
            .map(|contact| ChannelRecord::GroundTruth { contact })
            .collect(),
        geometry,
    )?;

    // Parallel record arrays must match the channel's timestamp count;
    // checking up front keeps the zips below from silently truncating.
    check_rows(
        ChannelTag::ContactForces,
        contact_t.len(),
        [("lcm_tau_fb", &lcm_tau_fb), ("lcm_tau_ff", &lcm_tau_ff)],
    )?;
    let contact_forces = ChannelSequence::new(
        ChannelTag::ContactForces,
        contact_t,
        lcm_tau_fb
            .into_iter()
            .zip(lcm_tau_ff)
            .map(|(tau_feed_back, tau_feed_forward)| ChannelRecord::ContactForces {
                tau_feed_back,
                tau_feed_forward,
            })
            .collect(),
        geometry,
    )?;

    check_rows(
        ChannelTag::LegState,
        legcontrol_t.len(),
        [
            ("lcm_q", &lcm_q),
            ("lcm_p", &lcm_p),
            ("lcm_qd", &lcm_qd),
            ("lcm_v", &lcm_v),
            ("lcm_tau_est", &lcm_tau_est),
        ],
    )?;
    let leg_records = lcm_q
        .into_iter()
        .zip(lcm_p)
        .zip(lcm_qd)
        .zip(lcm_v)
        .zip(lcm_tau_est)
        .map(|((((q, p), qd), v), tau_est)| ChannelRecord::LegState { q, p, qd, v, tau_est })
        .collect();
    let leg_state = ChannelSequence::new(ChannelTag::LegState, legcontrol_t, leg_records, geometry)?;

    check_rows(
        ChannelTag::Imu,
        imu_t.len(),
        [("lcm_acc", &lcm_acc), ("lcm_gyro", &lcm_gyro)],
    )?;
    let imu_records = lcm_acc
        .into_iter()
        .zip(lcm_gyro)
        .map(|(acc, omega)| {
            Ok(ChannelRecord::Imu {
                acc: fixed3(ChannelTag::Imu, "lcm_acc", acc)?,
                omega: fixed3(ChannelTag::Imu, "lcm_gyro", omega)?,
            })
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;
    let imu = ChannelSequence::new(ChannelTag::Imu, imu_t, imu_records, geometry)?;

    Ok(vec![ground_truth, contact_forces, leg_state, imu])
}

/// Check that every named record array has exactly `expected` rows (the
/// channel's timestamp count).
fn check_rows<const N: usize>(
    tag: ChannelTag,
    expected: usize,
    arrays: [(&str, &Vec<Vec<f64>>); N],
) -> Result<(), ConvertError> {
    for (name, rows) in arrays {
        if rows.len() != expected {
            return Err(ConvertError::source_integrity(
                tag,
                format!("array '{name}' has {} rows, expected {expected}", rows.len()),
            ));
        }
    }
    Ok(())
}

fn fixed3(tag: ChannelTag, field: &str, row: Vec<f64>) -> Result<[f64; 3], ConvertError> {
    <[f64; 3]>::try_from(row.as_slice()).map_err(|_| {
        ConvertError::source_integrity(
            tag,
            format!("field '{field}' row has {} values, expected 3", row.len()),
        )
    })
}
