//! Configuration parsing.
//!
//! Supports TOML (primary) and JSON formats.

use contracts::{ConversionPlan, ConvertError};

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (recommended)
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Infer the format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse TOML configuration
pub fn parse_toml(content: &str) -> Result<ConversionPlan, ConvertError> {
    toml::from_str(content).map_err(|e| ConvertError::ConfigParse {
        message: format!("TOML parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse JSON configuration
pub fn parse_json(content: &str) -> Result<ConversionPlan, ConvertError> {
    serde_json::from_str(content).map_err(|e| ConvertError::ConfigParse {
        message: format!("JSON parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse configuration in the given format
pub fn parse(content: &str, format: ConfigFormat) -> Result<ConversionPlan, ConvertError> {
    match format {
        ConfigFormat::Toml => parse_toml(content),
        ConfigFormat::Json => parse_json(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_minimal() {
        let content = r#"
[source]
path = "rec.json"

[output]
path = "rec.log"
overwrite = false

[geometry]
num_legs = 4
"#;
        let plan = parse_toml(content).unwrap();
        assert_eq!(plan.geometry.num_legs, 4);
        assert!(!plan.output.overwrite);
    }

    #[test]
    fn test_parse_json() {
        let content = r#"{
            "source": {"path": "rec.json"},
            "output": {"path": "rec.log"},
            "geometry": {"num_legs": 2}
        }"#;
        let plan = parse_json(content).unwrap();
        assert_eq!(plan.geometry.num_legs, 2);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_extension("TOML"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("yaml"), None);
    }

    #[test]
    fn test_parse_error_is_config_parse() {
        assert!(matches!(
            parse_toml("not = [valid"),
            Err(ConvertError::ConfigParse { .. })
        ));
    }
}
