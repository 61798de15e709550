//! # Mux Engine
//!
//! Multi-channel timestamp synchronization and event multiplexing.
//!
//! Responsibilities:
//! - Build the global ordered, deduplicated timeline across all channels
//! - Drive one strictly serial forward pass over the timeline
//! - Emit one event per channel per matching timestamp, in a fixed tie order
//! - Track per-channel cursor/exhaustion state and report completion
//!
//! ## Usage
//!
//! ```ignore
//! use mux_engine::Multiplexer;
//!
//! let mux = Multiplexer::new(sequences, geometry, epoch_micros)?;
//! let stats = mux.run(&mut sink).await?;
//! println!("{} events", stats.total_events());
//! ```

mod engine;
mod timeline;

pub use engine::{MuxStats, Multiplexer};
pub use timeline::build_timeline;

// Re-export contracts types used at the engine boundary
pub use contracts::{ChannelSequence, ChannelTag, ConvertError, LegGeometry, LogEvent};
