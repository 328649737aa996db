//! Letterfit
//!
//! Automatic side-bearing computation for outline fonts, implementing the
//! Tracy and Sousa spacing methodologies over an in-memory glyph model.

pub mod font;
pub mod geometry;
pub mod logging;
pub mod spacing;

// Engine API
pub use font::{Font, FontInfo, Glyph};
pub use geometry::{average_side_bearing, normalize_metrics, read_side_bearings, SideBearings};
pub use spacing::{
    apply_sousa_method, apply_tracy_method, estimate_default_spacing, generate_adhesion_text,
    SousaSettings, TracySettings,
};
