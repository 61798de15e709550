//! Channel completion callback
//!
//! Fired exactly once per channel when its cursor reaches the end. Advisory
//! progress reporting only; not part of the ordering contract.

use std::sync::Arc;

use crate::ChannelTag;

/// Callback invoked when a channel transitions to exhausted.
///
/// Uses `Arc` so the same observer can be shared across contexts.
pub type ChannelCompleteCallback = Arc<dyn Fn(ChannelTag) + Send + Sync>;
