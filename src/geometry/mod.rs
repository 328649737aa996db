//! Glyph geometry operations
//!
//! The side-bearing mutation primitive and the metric reads built on top of
//! it. Everything here is a deterministic in-place transform of one glyph.

pub mod bearings;

pub use bearings::{
    average_side_bearing, normalize_metrics, read_side_bearings, set_side_bearings, SideBearings,
};
