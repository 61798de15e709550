//! Configuration validation.
//!
//! Rules:
//! - source.path and output.path non-empty and distinct
//! - geometry.num_legs >= 1 with a representable joint count

use contracts::{ConversionPlan, ConvertError, LegGeometry};

/// Validate a ConversionPlan.
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(plan: &ConversionPlan) -> Result<(), ConvertError> {
    validate_paths(plan)?;
    validate_geometry(plan)?;
    Ok(())
}

fn validate_paths(plan: &ConversionPlan) -> Result<(), ConvertError> {
    if plan.source.path.as_os_str().is_empty() {
        return Err(ConvertError::config_validation(
            "source.path",
            "path must not be empty",
        ));
    }
    if plan.output.path.as_os_str().is_empty() {
        return Err(ConvertError::config_validation(
            "output.path",
            "path must not be empty",
        ));
    }
    if plan.source.path == plan.output.path {
        return Err(ConvertError::config_validation(
            "output.path",
            "output must not overwrite the source recording",
        ));
    }
    Ok(())
}

fn validate_geometry(plan: &ConversionPlan) -> Result<(), ConvertError> {
    // LegGeometry::new carries the actual rules (>= 1 leg, joint count fits
    // the wire field); validation just surfaces them at config-load time.
    LegGeometry::new(plan.geometry.num_legs).map(|_| ())
}
