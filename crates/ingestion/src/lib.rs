//! # Ingestion
//!
//! Source-data boundary: turns a recording container into validated
//! [`contracts::ChannelSequence`]s.
//!
//! Responsibilities:
//! - Parse the JSON recording container into named per-channel arrays
//! - Zip parallel arrays into typed channel records
//! - Enforce the input-integrity preconditions (length parity, strictly
//!   increasing timestamps, geometry-conformant shapes) before anything is
//!   emitted downstream
//!
//! ## Usage
//!
//! ```ignore
//! use ingestion::{load_recording, build_sequences};
//!
//! let recording = load_recording(Path::new("sync_data.json"))?;
//! let sequences = build_sequences(recording, &geometry)?;
//! ```
//!
//! ## Mock Testing
//!
//! ```ignore
//! use ingestion::mock_recording;
//!
//! let recording = mock_recording(&geometry, 1.0);
//! ```

mod container;
mod loader;
mod mock;

pub use container::RawRecording;
pub use loader::{build_sequences, load_recording};
pub use mock::mock_recording;
