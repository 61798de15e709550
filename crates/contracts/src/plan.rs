//! ConversionPlan - configuration contracts shared across crates

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Full conversion plan loaded from a TOML/JSON config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionPlan {
    /// Source recording location
    pub source: SourceConfig,

    /// Output log location
    pub output: OutputConfig,

    /// Leg/joint sizing
    pub geometry: GeometryConfig,
}

/// Source recording configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the recording container (JSON)
    pub path: PathBuf,
}

/// Output log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the event log to write
    pub path: PathBuf,

    /// Overwrite an existing log instead of failing
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,
}

fn default_overwrite() -> bool {
    true
}

/// Geometry configuration (joint count is derived, never configured)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Number of legs
    pub num_legs: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_defaults_true() {
        let json = r#"{"path": "out.log"}"#;
        let output: OutputConfig = serde_json::from_str(json).unwrap();
        assert!(output.overwrite);
    }
}
