//! Side-bearing mutation and measurement
//!
//! `set_side_bearings` is the single mutation primitive every rule engine
//! goes through: shift the outline so the left bearing matches, then set the
//! advance width from the target right bearing. Reads derive bearings from
//! the (lazily cached) bounding box, so a read is always consistent with the
//! last mutation.

use tracing::{debug, warn};

use crate::font::{Font, Glyph};

/// Shifts smaller than this are ignored, which makes repeated application
/// with the same targets a no-op.
const SHIFT_EPSILON: f64 = 0.001;

/// Left and right side bearings of one glyph, in design units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideBearings {
    pub lsb: f64,
    pub rsb: f64,
}

/// Set a glyph's side bearings in place.
///
/// `None` on either side leaves that side unchanged. For a glyph with no
/// outline the left side is a no-op and a right target becomes the full
/// advance width. The outline shift and the advance-width update complete
/// before this function returns, so callers never observe a half-applied
/// glyph.
pub fn set_side_bearings(glyph: &mut Glyph, target_left: Option<f64>, target_right: Option<f64>) {
    let Some(bounds) = glyph.bounds() else {
        if let Some(rsb) = target_right {
            glyph.set_advance_width(rsb.max(0.0));
        }
        return;
    };

    if let Some(lsb) = target_left {
        let shift = lsb - bounds.min_x();
        if shift.abs() > SHIFT_EPSILON {
            glyph.translate_x(shift);
        }
    }

    if let Some(rsb) = target_right {
        // bounds query picks up the shift above
        if let Some(bounds) = glyph.bounds() {
            let advance = bounds.max_x() + rsb;
            if advance < 0.0 {
                warn!(
                    "advance width for '{}' clamped to 0 (was {})",
                    glyph.name(),
                    advance
                );
            }
            glyph.set_advance_width(advance.max(0.0));
        }
    }
}

/// Read a glyph's side bearings, rounded to whole design units.
///
/// A character with no glyph reads as `{0, 0}`; an empty outline reads as
/// `{0, advance}`.
pub fn read_side_bearings(font: &Font, ch: char) -> SideBearings {
    let Some(glyph) = font.glyph_for_char(ch) else {
        return SideBearings { lsb: 0.0, rsb: 0.0 };
    };
    let (lsb, rsb) = raw_side_bearings(glyph);
    SideBearings {
        lsb: lsb.round(),
        rsb: rsb.round(),
    }
}

/// Unrounded bearings, used wherever the engines need exact values
pub(crate) fn raw_side_bearings(glyph: &Glyph) -> (f64, f64) {
    match glyph.bounds() {
        Some(bounds) => (bounds.min_x(), glyph.advance_width() - bounds.max_x()),
        None => (0.0, glyph.advance_width()),
    }
}

/// Mean of `(lsb + rsb) / 2` over every mapped, non-space glyph.
///
/// Returns 0 when no glyph is eligible.
pub fn average_side_bearing(font: &Font) -> f64 {
    let mut total = 0.0;
    let mut count = 0u32;
    for glyph in font.glyphs() {
        let eligible =
            glyph.codepoint().is_some_and(|c| c != ' ') && glyph.name() != "space";
        if !eligible {
            continue;
        }
        let (lsb, rsb) = raw_side_bearings(glyph);
        total += lsb + rsb;
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    (total / (count as f64 * 2.0)).round()
}

/// Zero out every glyph's left bearing and tighten its advance width.
///
/// Shifts each mapped, non-space outline so its left bearing is 0 and sets
/// the advance width to the outline width, giving the spacing engines a
/// clean slate. Empty outlines are left alone.
pub fn normalize_metrics(font: &mut Font) {
    let mut touched = 0u32;
    for glyph in font.glyphs_mut() {
        if glyph.name() == "space" || glyph.codepoint() == Some(' ') {
            continue;
        }
        let Some(bounds) = glyph.bounds() else {
            continue;
        };
        let shift = -bounds.min_x();
        if shift != 0.0 {
            glyph.translate_x(shift);
        }
        glyph.set_advance_width(bounds.width());
        touched += 1;
    }
    debug!("normalized metrics for {} glyphs", touched);
}
