//! Mock recording generator
//!
//! For tests without a real dataset export. Timestamps are generated on an
//! integer-microsecond grid per channel, so coincident samples across
//! channels compare exactly equal as f64, the same way a real export's
//! shared clock values do.

use contracts::LegGeometry;

use crate::container::RawRecording;

// Per-channel sample periods, microseconds
const MOCAP_PERIOD_US: i64 = 10_000; // 100 Hz
const CONTACT_PERIOD_US: i64 = 2_000; // 500 Hz
const LEG_PERIOD_US: i64 = 2_000; // 500 Hz
const IMU_PERIOD_US: i64 = 2_500; // 400 Hz

/// Generate a synthetic recording of the given duration.
///
/// All four channels are populated; every mocap timestamp coincides with
/// contact/leg/IMU samples, so tie handling is exercised.
pub fn mock_recording(geometry: &LegGeometry, duration_s: f64) -> RawRecording {
    let end_us = (duration_s * 1e6) as i64;
    let nl = geometry.num_legs as usize;
    let nj = geometry.num_joints as usize;

    let grid = |period: i64| -> Vec<f64> {
        (0..)
            .map(|i| i * period)
            .take_while(|&t| t <= end_us)
            .map(|t| t as f64 / 1e6)
            .collect()
    };

    let mocap_t = grid(MOCAP_PERIOD_US);
    let contact_t = grid(CONTACT_PERIOD_US);
    let legcontrol_t = grid(LEG_PERIOD_US);
    let imu_t = grid(IMU_PERIOD_US);

    let contact_labels = (0..mocap_t.len())
        .map(|i| (0..nl).map(|leg| ((i + leg) % 2) as i8).collect())
        .collect();

    let torque_row = |i: usize, scale: f64| -> Vec<f64> {
        (0..nj).map(|j| scale * (i as f64 + j as f64 * 0.1)).collect()
    };
    let lcm_tau_fb = (0..contact_t.len()).map(|i| torque_row(i, 0.5)).collect();
    let lcm_tau_ff = (0..contact_t.len()).map(|i| torque_row(i, -0.25)).collect();

    let lcm_q = (0..legcontrol_t.len()).map(|i| torque_row(i, 0.01)).collect();
    let lcm_p = (0..legcontrol_t.len()).map(|i| torque_row(i, 0.02)).collect();
    let lcm_qd = (0..legcontrol_t.len()).map(|i| torque_row(i, 0.03)).collect();
    let lcm_v = (0..legcontrol_t.len()).map(|i| torque_row(i, 0.04)).collect();
    let lcm_tau_est = (0..legcontrol_t.len()).map(|i| torque_row(i, 0.05)).collect();

    let lcm_acc = (0..imu_t.len())
        .map(|i| vec![0.01 * i as f64, -0.01 * i as f64, 9.81])
        .collect();
    let lcm_gyro = (0..imu_t.len())
        .map(|i| vec![0.001 * i as f64, 0.0, -0.001 * i as f64])
        .collect();

    RawRecording {
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
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_shapes_match_geometry() {
        let geometry = LegGeometry::new(4).unwrap();
        let recording = mock_recording(&geometry, 0.1);

        assert_eq!(recording.mocap_t.len(), recording.contact_labels.len());
        assert!(recording.contact_labels.iter().all(|row| row.len() == 4));
        assert!(recording.lcm_q.iter().all(|row| row.len() == 12));
        assert!(recording.lcm_acc.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_mock_timestamps_share_grid_points() {
        let geometry = LegGeometry::new(4).unwrap();
        let recording = mock_recording(&geometry, 0.1);

        // Every mocap timestamp also appears in the contact channel, exact
        // f64 equality included.
        for t in &recording.mocap_t {
            assert!(recording.contact_t.contains(t));
        }
    }

    #[test]
    fn test_mock_timestamps_strictly_increasing() {
        let geometry = LegGeometry::new(2).unwrap();
        let recording = mock_recording(&geometry, 0.2);
        for channel in [
            &recording.mocap_t,
            &recording.contact_t,
            &recording.legcontrol_t,
            &recording.imu_t,
        ] {
            assert!(channel.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
