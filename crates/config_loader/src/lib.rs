//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Validate configuration legality
//! - Generate `ConversionPlan`
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let plan = ConfigLoader::load_from_path(Path::new("convert.toml")).unwrap();
//! println!("Source: {}", plan.source.path.display());
//! ```

mod parser;
mod validator;

pub use contracts::ConversionPlan;
pub use parser::ConfigFormat;

use contracts::ConvertError;
use std::path::Path;

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<ConversionPlan, ConvertError> {
        let format = Self::detect_format(path)?;
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load configuration from string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<ConversionPlan, ConvertError> {
        let plan = parser::parse(content, format)?;
        validator::validate(&plan)?;
        Ok(plan)
    }

    /// Serialize ConversionPlan to TOML string
    pub fn to_toml(plan: &ConversionPlan) -> Result<String, ConvertError> {
        toml::to_string_pretty(plan)
            .map_err(|e| ConvertError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize ConversionPlan to JSON string
    pub fn to_json(plan: &ConversionPlan) -> Result<String, ConvertError> {
        serde_json::to_string_pretty(plan)
            .map_err(|e| ConvertError::config_parse(format!("JSON serialize error: {e}")))
    }

    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ConvertError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ConvertError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ConvertError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }
}
