//! # Codec
//!
//! Per-channel binary record encoding.
//!
//! Responsibilities:
//! - Encode one `ChannelRecord` + timestamp into deterministic payload bytes
//! - Decode payloads back for verification tooling
//!
//! ## Wire format
//!
//! Big-endian throughout. Every payload starts with the 8-byte schema
//! fingerprint of its channel, then the fields in schema order:
//!
//! | channel            | fields after fingerprint                                      |
//! |--------------------|---------------------------------------------------------------|
//! | `ground_truth`     | i8 num_legs, f64 timestamp, i8 contact[num_legs]              |
//! | `contact_data`     | i8 num_joints, f64 timestamp, f64 tau_fb[nj], f64 tau_ff[nj]  |
//! | `leg_control_data` | i8 num_joints, f64 timestamp, f64 q/p/qd/v/tau_est[nj]        |
//! | `microstrain`      | f64 timestamp, f64 acc[3], f64 omega[3]                       |
//!
//! Array lengths are fixed by [`contracts::LegGeometry`], so no per-array
//! length prefix is written. Encoding is total over shape-checked records.

mod decode;
mod encode;

pub use decode::decode_record;
pub use encode::{encode_record, encoded_len, fingerprint};
