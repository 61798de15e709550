//! Recording container schema.
//!
//! Field names follow the source recording's variable names (`mocap_t`,
//! `contact_labels`, ...), so an exported dataset loads without renaming.
//! The container is treated as already-parsed numeric arrays; all semantic
//! validation happens when sequences are built.

use serde::{Deserialize, Serialize};

use contracts::ChannelTag;

/// Raw per-channel arrays as stored in the recording container.
///
/// Timestamp vectors (`*_t`) and their parallel record arrays must be the
/// same length per channel; that invariant is checked at sequence
/// construction, not at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecording {
    // ===== ground_truth =====
    /// Motion-capture timestamps
    pub mocap_t: Vec<f64>,
    /// Per-leg contact labels, one row per mocap sample
    pub contact_labels: Vec<Vec<i8>>,

    // ===== contact_data =====
    /// Contact-force timestamps
    pub contact_t: Vec<f64>,
    /// Feedback torque rows
    pub lcm_tau_fb: Vec<Vec<f64>>,
    /// Feedforward torque rows
    pub lcm_tau_ff: Vec<Vec<f64>>,

    // ===== leg_control_data =====
    /// Leg-state timestamps
    pub legcontrol_t: Vec<f64>,
    /// Joint position rows
    pub lcm_q: Vec<Vec<f64>>,
    /// Spatial position rows
    pub lcm_p: Vec<Vec<f64>>,
    /// Joint velocity rows
    pub lcm_qd: Vec<Vec<f64>>,
    /// Spatial velocity rows
    pub lcm_v: Vec<Vec<f64>>,
    /// Estimated torque rows
    pub lcm_tau_est: Vec<Vec<f64>>,

    // ===== microstrain =====
    /// IMU timestamps
    pub imu_t: Vec<f64>,
    /// Linear acceleration rows (3 values each)
    pub lcm_acc: Vec<Vec<f64>>,
    /// Angular rate rows (3 values each)
    pub lcm_gyro: Vec<Vec<f64>>,
}

impl RawRecording {
    /// Timestamp count per channel, for summaries and validation output.
    pub fn sample_counts(&self) -> [(ChannelTag, usize); 4] {
        [
            (ChannelTag::GroundTruth, self.mocap_t.len()),
            (ChannelTag::ContactForces, self.contact_t.len()),
            (ChannelTag::LegState, self.legcontrol_t.len()),
            (ChannelTag::Imu, self.imu_t.len()),
        ]
    }

    /// Total samples across all channels.
    pub fn total_samples(&self) -> usize {
        self.sample_counts().iter().map(|(_, n)| n).sum()
    }
}
