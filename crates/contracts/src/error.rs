//! Layered error definitions
//!
//! Categorized by source: config / source integrity / consistency / sink / io.
//! Source-integrity faults mean "bad data"; consistency faults mean "broken
//! converter" and are surfaced distinctly so operators can tell the two apart.

use thiserror::Error;

use crate::ChannelTag;

/// Unified error type
#[derive(Debug, Error)]
pub enum ConvertError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Source Errors =====
    /// Recording container parse error
    #[error("recording parse error: {message}")]
    RecordingParse { message: String },

    /// Input-integrity fault, detected at sequence construction and fatal
    /// before any emission
    #[error("source integrity fault on channel '{channel}': {message}")]
    SourceIntegrity {
        channel: ChannelTag,
        message: String,
    },

    // ===== Internal Errors =====
    /// Internal-consistency fault (timeline union and channel cursors
    /// disagree); indicates a converter bug, not bad input
    #[error("internal consistency fault: {message}")]
    Consistency { message: String },

    // ===== Sink Errors =====
    /// Sink write error; the log may be partially written and must be
    /// treated as corrupt
    #[error("sink '{sink_name}' write error: {message}")]
    SinkWrite { sink_name: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ConvertError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create recording parse error
    pub fn recording_parse(message: impl Into<String>) -> Self {
        Self::RecordingParse {
            message: message.into(),
        }
    }

    /// Create source integrity fault
    pub fn source_integrity(channel: ChannelTag, message: impl Into<String>) -> Self {
        Self::SourceIntegrity {
            channel,
            message: message.into(),
        }
    }

    /// Create internal consistency fault
    pub fn consistency(message: impl Into<String>) -> Self {
        Self::Consistency {
            message: message.into(),
        }
    }

    /// Create sink write error
    pub fn sink_write(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkWrite {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }
}
