//! ChannelRecord - per-channel payload variants
//!
//! One variant per channel; the multiplexer dispatches on the fixed tag and
//! never inspects field contents.

use serde::{Deserialize, Serialize};

use crate::{ChannelTag, ConvertError, LegGeometry};

/// One per-timestamp payload record, shaped per channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChannelRecord {
    /// Motion-capture ground truth: per-leg contact flags
    GroundTruth {
        /// Contact flag per leg (len == num_legs)
        contact: Vec<i8>,
    },

    /// Joint contact forces
    ContactForces {
        /// Feedback torque per joint (len == num_joints)
        tau_feed_back: Vec<f64>,
        /// Feedforward torque per joint (len == num_joints)
        tau_feed_forward: Vec<f64>,
    },

    /// Leg kinematics/dynamics state, five per-joint arrays
    LegState {
        /// Joint position
        q: Vec<f64>,
        /// Spatial position
        p: Vec<f64>,
        /// Joint velocity
        qd: Vec<f64>,
        /// Spatial velocity
        v: Vec<f64>,
        /// Estimated torque
        tau_est: Vec<f64>,
    },

    /// Inertial measurement
    Imu {
        /// Linear acceleration (m/s^2)
        acc: [f64; 3],
        /// Angular rate (rad/s)
        omega: [f64; 3],
    },
}

impl ChannelRecord {
    /// The channel this record variant belongs to.
    pub fn tag(&self) -> ChannelTag {
        match self {
            ChannelRecord::GroundTruth { .. } => ChannelTag::GroundTruth,
            ChannelRecord::ContactForces { .. } => ChannelTag::ContactForces,
            ChannelRecord::LegState { .. } => ChannelTag::LegState,
            ChannelRecord::Imu { .. } => ChannelTag::Imu,
        }
    }

    /// Check every array field against the geometry.
    ///
    /// # Errors
    /// `SourceIntegrity` naming the offending field on shape mismatch.
    pub fn check_shape(&self, geometry: &LegGeometry) -> Result<(), ConvertError> {
        let expect = |field: &str, len: usize, want: usize| {
            if len == want {
                Ok(())
            } else {
                Err(ConvertError::source_integrity(
                    self.tag(),
                    format!("field '{field}' has length {len}, expected {want}"),
                ))
            }
        };

        let nl = geometry.num_legs as usize;
        let nj = geometry.num_joints as usize;
        match self {
            ChannelRecord::GroundTruth { contact } => expect("contact", contact.len(), nl),
            ChannelRecord::ContactForces {
                tau_feed_back,
                tau_feed_forward,
            } => {
                expect("tau_feed_back", tau_feed_back.len(), nj)?;
                expect("tau_feed_forward", tau_feed_forward.len(), nj)
            }
            ChannelRecord::LegState { q, p, qd, v, tau_est } => {
                expect("q", q.len(), nj)?;
                expect("p", p.len(), nj)?;
                expect("qd", qd.len(), nj)?;
                expect("v", v.len(), nj)?;
                expect("tau_est", tau_est.len(), nj)
            }
            // Fixed-size arrays, nothing to check
            ChannelRecord::Imu { .. } => Ok(()),
        }
    }
}
