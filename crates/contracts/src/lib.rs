//! # Contracts
//!
//! Frozen interface contracts (ICD), defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Time Model
//! - Source timestamps are recording-relative seconds (f64), strictly increasing per channel
//! - Log time keys are absolute integer microseconds: `epoch + round(t * 1e6)`

mod channel;
mod error;
mod event;
mod geometry;
mod plan;
mod progress;
mod record;
mod sequence;
mod sink;

pub use channel::ChannelTag;
pub use error::*;
pub use event::LogEvent;
pub use geometry::LegGeometry;
pub use plan::*;
pub use progress::ChannelCompleteCallback;
pub use record::ChannelRecord;
pub use sequence::ChannelSequence;
pub use sink::*;
