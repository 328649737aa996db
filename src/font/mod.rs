//! In-memory font model
//!
//! This module contains the font and glyph structures the spacing engines
//! operate on. Outline decoding and encoding live behind an external codec;
//! this model only carries what spacing needs: outlines, advance widths,
//! a character lookup, and global metrics.

pub mod data;
pub mod metrics;

// Explicit re-exports for public API
pub use data::{Font, Glyph};
pub use metrics::FontInfo;
