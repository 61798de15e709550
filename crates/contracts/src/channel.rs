//! ChannelTag - the closed set of recording channels
//!
//! Declaration order doubles as the emission tie order for coincident
//! timestamps, so the order here is a contract, not a convenience.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recording channel identifier.
///
/// The converter multiplexes exactly these four channels. Adding a channel
/// means adding a variant here plus one [`crate::ChannelRecord`] variant and
/// one codec rule; the multiplexer loop stays untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelTag {
    /// Motion-capture ground truth (per-leg contact labels)
    GroundTruth,

    /// Joint contact forces (feedback / feedforward torques)
    ContactForces,

    /// Leg kinematics and dynamics state
    LegState,

    /// Inertial measurement unit
    Imu,
}

impl ChannelTag {
    /// All channels, in the deterministic emission order used when several
    /// channels share a timestamp.
    pub const ALL: [ChannelTag; 4] = [
        ChannelTag::GroundTruth,
        ChannelTag::ContactForces,
        ChannelTag::LegState,
        ChannelTag::Imu,
    ];

    /// Wire channel name written into the event log.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelTag::GroundTruth => "ground_truth",
            ChannelTag::ContactForces => "contact_data",
            ChannelTag::LegState => "leg_control_data",
            ChannelTag::Imu => "microstrain",
        }
    }

    /// Dense index into per-channel state arrays (matches `ALL` order).
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ChannelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
