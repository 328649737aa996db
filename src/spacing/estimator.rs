//! Harmonic spacing estimator
//!
//! A heuristic that proposes a starting side bearing for a glyph from its
//! bounding box and the font's weight class. It only seeds the editable
//! master defaults; the rule engines never call it during application.

use tracing::debug;

use crate::font::Font;
use crate::spacing::settings::{
    MasterPair, MasterSet, OverrideMap, SousaGroups, SousaSettings, TracySettings,
};

/// Bearing returned for characters with no glyph or no outline
const EMPTY_FALLBACK: f64 = 40.0;

/// Round-shaped characters get tighter bearings; their bowls carry the
/// optical whitespace
const ROUND_SHAPES: [char; 8] = ['O', 'o', 'Q', 'C', 'G', 'e', 'c', '0'];

/// Estimate a default side bearing for one character.
///
/// The estimate infers a stem weight from the glyph height and weight
/// class, derives the internal counter width from it, and takes a fixed
/// fraction of that counter as external whitespace: 0.40 for uppercase,
/// 0.32 otherwise, scaled by 0.65 for round shapes. Never below 10 units.
pub fn estimate_default_spacing(font: &Font, ch: char) -> f64 {
    let Some(bounds) = font.glyph_for_char(ch).and_then(|g| g.bounds()) else {
        return EMPTY_FALLBACK;
    };

    let width = bounds.width();
    let height = bounds.height();

    let weight_factor = f64::from(font.info.weight_class) / 400.0;
    let estimated_stem = height * 0.16 * weight_factor.powf(0.7);
    let internal_counter = (width * 0.15).max(width - 2.0 * estimated_stem);

    let rhythm_ratio = if ch.is_uppercase() { 0.40 } else { 0.32 };
    let mut target = internal_counter * rhythm_ratio;
    if ROUND_SHAPES.contains(&ch) {
        target *= 0.65;
    }

    target.round().max(10.0)
}

impl MasterSet {
    /// Seed the four masters from the estimator.
    ///
    /// The 'n' master's right bearing is scaled to 0.95 of its left to
    /// account for the arch being optically lighter than the stem.
    pub fn estimate(font: &Font) -> Self {
        let n = estimate_default_spacing(font, 'n');
        let o = estimate_default_spacing(font, 'o');
        let h = estimate_default_spacing(font, 'H');
        let o_cap = estimate_default_spacing(font, 'O');
        debug!("estimated masters n={} o={} H={} O={}", n, o, h, o_cap);

        Self {
            cap_h: MasterPair::even(h),
            cap_o: MasterPair::even(o_cap),
            low_n: MasterPair::new(n, (n * 0.95).round()),
            low_o: MasterPair::even(o),
        }
    }
}

impl TracySettings {
    /// Default Tracy settings for a font: estimated masters, no overrides
    pub fn estimate(font: &Font) -> Self {
        Self {
            masters: MasterSet::estimate(font),
            overrides: OverrideMap::new(),
        }
    }
}

impl SousaSettings {
    /// Default Sousa settings for a font: estimated masters, the standard
    /// group partition, no overrides
    pub fn estimate(font: &Font) -> Self {
        Self {
            masters: MasterSet::estimate(font),
            groups: SousaGroups::default(),
            overrides: OverrideMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontInfo, Glyph};
    use kurbo::BezPath;

    fn boxed(ch: char, width: f64, height: f64) -> Glyph {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((width, 0.0));
        path.line_to((width, height));
        path.line_to((0.0, height));
        path.close_path();
        Glyph::new(ch.to_string(), Some(ch), path, width)
    }

    fn regular_font() -> Font {
        let mut font = Font::new(FontInfo::default());
        font.push_glyph(boxed('n', 400.0, 500.0));
        font.push_glyph(boxed('o', 420.0, 500.0));
        font.push_glyph(boxed('H', 500.0, 700.0));
        font.push_glyph(boxed('O', 540.0, 700.0));
        font.push_glyph(Glyph::new("space", Some(' '), BezPath::new(), 250.0));
        font
    }

    #[test]
    fn test_estimate_matches_formula_for_regular_weight() {
        let font = regular_font();
        // height 500, weight factor 1: stem = 80, counter = 400 - 160 = 240
        // lowercase rhythm 0.32 -> 76.8 -> 77
        assert_eq!(estimate_default_spacing(&font, 'n'), 77.0);
        // uppercase 'H': stem = 112, counter = 500 - 224 = 276, 0.40 -> 110
        assert_eq!(estimate_default_spacing(&font, 'H'), 110.0);
    }

    #[test]
    fn test_round_shapes_are_tightened() {
        let font = regular_font();
        let o = estimate_default_spacing(&font, 'o');
        // same box as 'o' but not in the round set would be
        // (420 - 160) * 0.32 = 83.2; rounds scale by 0.65 first
        assert_eq!(o, (260.0_f64 * 0.32 * 0.65).round());
    }

    #[test]
    fn test_missing_and_empty_glyphs_fall_back() {
        let font = regular_font();
        assert_eq!(estimate_default_spacing(&font, 'Z'), EMPTY_FALLBACK);
        assert_eq!(estimate_default_spacing(&font, ' '), EMPTY_FALLBACK);
    }

    #[test]
    fn test_heavier_weight_tightens_bearings() {
        let mut heavy = regular_font();
        heavy.info.weight_class = 700;
        let light = regular_font();
        // a heavier stem eats more of the counter, shrinking the estimate
        assert!(estimate_default_spacing(&heavy, 'n') < estimate_default_spacing(&light, 'n'));
    }

    #[test]
    fn test_master_seeding_scales_n_right() {
        let font = regular_font();
        let masters = MasterSet::estimate(&font);
        assert_eq!(masters.low_n.right, (masters.low_n.left * 0.95).round());
        assert_eq!(masters.cap_h.left, masters.cap_h.right);
    }
}
