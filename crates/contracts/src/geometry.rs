//! LegGeometry - leg/joint sizing established once at startup

use serde::{Deserialize, Serialize};

use crate::ConvertError;

/// Leg/joint counts that size the per-channel record shapes.
///
/// Computed once before any sequence is constructed; every array-valued
/// record field is checked against these counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegGeometry {
    /// Number of legs (ground-truth contact flags per sample)
    pub num_legs: u8,

    /// Number of actuated joints, always `3 * num_legs`
    pub num_joints: u8,
}

impl LegGeometry {
    /// Create a geometry from a leg count. Joint count is derived, never
    /// configured independently.
    ///
    /// # Errors
    /// `ConfigValidation` if `num_legs` is zero or the derived joint count
    /// does not fit the wire schema's i8 field.
    pub fn new(num_legs: u8) -> Result<Self, ConvertError> {
        if num_legs == 0 {
            return Err(ConvertError::config_validation(
                "geometry.num_legs",
                "num_legs must be >= 1",
            ));
        }
        let num_joints = num_legs.checked_mul(3).filter(|&j| j <= i8::MAX as u8);
        let Some(num_joints) = num_joints else {
            return Err(ConvertError::config_validation(
                "geometry.num_legs",
                format!("num_legs {num_legs} yields a joint count beyond the i8 wire field"),
            ));
        };
        Ok(Self {
            num_legs,
            num_joints,
        })
    }
}
