//! Tracy spacing method
//!
//! Walter Tracy's closed-form system: every Latin letter's bearings are a
//! fixed algebraic combination of four tuned master values. Uppercase
//! letters combine the 'H' and 'O' left bearings; lowercase letters combine
//! the 'n' stem, the 'n' arch (its right bearing), and the 'o' round. The
//! per-letter assignments are the methodology itself and are reproduced as
//! a static table, not derived.

use tracing::debug;

use crate::font::Font;
use crate::geometry::set_side_bearings;
use crate::spacing::settings::{resolve_override, OverrideMap, TracySettings};

/// Derived quantities for the uppercase table
struct CapScalars {
    h: f64,
    o: f64,
    more: f64,
    less: f64,
    min: f64,
    visual: f64,
}

impl CapScalars {
    fn from_masters(h: f64, o: f64) -> Self {
        Self {
            h,
            o,
            more: (h * 1.15).round(),
            less: (h * 0.85).round(),
            min: (h * 0.25).round().max(5.0),
            visual: ((h + o) / 2.0).round(),
        }
    }
}

/// Derived quantities for the lowercase table
struct LowScalars {
    stem: f64,
    arch: f64,
    round: f64,
    more_stem: f64,
    less_round: f64,
    min: f64,
    visual: f64,
}

impl LowScalars {
    fn from_masters(stem: f64, arch: f64, round: f64) -> Self {
        Self {
            stem,
            arch,
            round,
            more_stem: (stem * 1.15).round(),
            less_round: (round * 0.9).round(),
            min: (stem * 0.25).round().max(5.0),
            visual: ((stem + round) / 2.0).round(),
        }
    }
}

fn uppercase_rule(ch: char, s: &CapScalars) -> Option<(f64, f64)> {
    let pair = match ch {
        'A' => (s.min, s.min),
        'B' => (s.h, s.less),
        'C' => (s.o, s.less),
        'D' => (s.h, s.o),
        'E' => (s.h, s.less),
        'F' => (s.h, s.less),
        'G' => (s.o, s.more),
        'H' => (s.h, s.h),
        'I' => (s.h, s.h),
        'J' => (s.min, s.h),
        'K' => (s.h, s.min),
        'L' => (s.h, s.min),
        'M' => (s.more, s.more),
        'N' => (s.more, s.more),
        'O' => (s.o, s.o),
        'P' => (s.h, s.o),
        'Q' => (s.o, s.o),
        'R' => (s.h, s.min),
        'S' => (s.visual, s.visual),
        'T' => (s.min, s.min),
        'U' => (s.more, s.more),
        'V' => (s.min, s.min),
        'W' => (s.min, s.min),
        'X' => (s.min, s.min),
        'Y' => (s.min, s.min),
        'Z' => (s.less, s.less),
        _ => return None,
    };
    Some(pair)
}

fn lowercase_rule(ch: char, s: &LowScalars) -> Option<(f64, f64)> {
    let pair = match ch {
        'a' => (s.round, s.stem),
        'b' => (s.stem, s.round),
        'c' => (s.round, s.less_round),
        'd' => (s.round, s.stem),
        'e' => (s.round, s.less_round),
        'f' => (s.stem, s.min),
        'g' => (s.round, s.visual),
        'h' => (s.more_stem, s.arch),
        'i' => (s.more_stem, s.stem),
        'j' => (s.stem, s.stem),
        'k' => (s.stem, s.min),
        'l' => (s.more_stem, s.stem),
        'm' => (s.stem, s.arch),
        'n' => (s.stem, s.arch),
        'o' => (s.round, s.round),
        'p' => (s.more_stem, s.round),
        'q' => (s.round, s.stem),
        'r' => (s.stem, s.min),
        's' => (s.less_round, s.less_round),
        't' => (s.stem, s.min),
        'u' => (s.stem, s.stem),
        'v' => (s.min, s.min),
        'w' => (s.min, s.min),
        'x' => (s.visual, s.visual),
        'y' => (s.min, s.min),
        'z' => (s.visual, s.visual),
        _ => return None,
    };
    Some(pair)
}

/// Apply the Tracy method to every basic Latin letter of the font.
///
/// The four master glyphs take their settings values directly; every other
/// letter takes its table-derived pair. Overrides replace the derived value
/// side by side, and characters without a glyph are skipped.
pub fn apply_tracy_method(font: &mut Font, settings: &TracySettings) {
    let m = &settings.masters;
    let caps = CapScalars::from_masters(m.cap_h.left, m.cap_o.left);
    let lows = LowScalars::from_masters(m.low_n.left, m.low_n.right, m.low_o.left);

    for ch in 'A'..='Z' {
        let (left, right) = match ch {
            // masters are always set from their own settings values
            'H' => (m.cap_h.left, m.cap_h.right),
            'O' => (m.cap_o.left, m.cap_o.right),
            _ => match uppercase_rule(ch, &caps) {
                Some(pair) => pair,
                None => continue,
            },
        };
        apply_rule(font, &settings.overrides, ch, left, right);
    }

    for ch in 'a'..='z' {
        let (left, right) = match ch {
            'n' => (m.low_n.left, m.low_n.right),
            'o' => (m.low_o.left, m.low_o.right),
            _ => match lowercase_rule(ch, &lows) {
                Some(pair) => pair,
                None => continue,
            },
        };
        apply_rule(font, &settings.overrides, ch, left, right);
    }

    debug!("applied Tracy method to {}", font.info.display_name());
}

fn apply_rule(font: &mut Font, overrides: &OverrideMap, ch: char, left: f64, right: f64) {
    let (left, right) = resolve_override(overrides, ch, Some(left), Some(right));
    let Some(glyph) = font.glyph_for_char_mut(ch) else {
        debug!("no glyph for '{}', skipping", ch);
        return;
    };
    set_side_bearings(glyph, left, right);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontInfo, Glyph};
    use crate::geometry::read_side_bearings;
    use crate::spacing::settings::{MasterPair, MasterSet, OverrideMap, SideBearingPair};
    use kurbo::BezPath;

    fn boxed(ch: char, x0: f64, x1: f64) -> Glyph {
        let mut path = BezPath::new();
        path.move_to((x0, 0.0));
        path.line_to((x1, 0.0));
        path.line_to((x1, 500.0));
        path.line_to((x0, 500.0));
        path.close_path();
        Glyph::new(ch.to_string(), Some(ch), path, x1 + 40.0)
    }

    fn latin_font() -> Font {
        let mut font = Font::new(FontInfo::default());
        for ch in ('A'..='Z').chain('a'..='z') {
            font.push_glyph(boxed(ch, 30.0, 430.0));
        }
        font
    }

    fn masters() -> MasterSet {
        MasterSet {
            cap_h: MasterPair::even(80.0),
            cap_o: MasterPair::even(90.0),
            low_n: MasterPair::new(60.0, 65.0),
            low_o: MasterPair::even(55.0),
        }
    }

    fn settings() -> TracySettings {
        TracySettings {
            masters: masters(),
            overrides: OverrideMap::new(),
        }
    }

    #[test]
    fn test_masters_set_directly_and_v_gets_min() {
        let mut font = latin_font();
        apply_tracy_method(&mut font, &settings());

        let h = read_side_bearings(&font, 'H');
        assert_eq!((h.lsb, h.rsb), (80.0, 80.0));

        // minH = max(5, round(80 * 0.25)) = 20
        let v = read_side_bearings(&font, 'V');
        assert_eq!((v.lsb, v.rsb), (20.0, 20.0));
    }

    #[test]
    fn test_table_combinations() {
        let mut font = latin_font();
        apply_tracy_method(&mut font, &settings());

        // D pairs the H stem with the O round
        let d = read_side_bearings(&font, 'D');
        assert_eq!((d.lsb, d.rsb), (80.0, 90.0));

        // M widens the stem value: round(80 * 1.15) = 92
        let m = read_side_bearings(&font, 'M');
        assert_eq!((m.lsb, m.rsb), (92.0, 92.0));

        // S sits between stem and round: round((80 + 90) / 2) = 85
        let s = read_side_bearings(&font, 'S');
        assert_eq!((s.lsb, s.rsb), (85.0, 85.0));

        // lowercase h: round(60 * 1.15) = 69 with the arch on the right
        let h = read_side_bearings(&font, 'h');
        assert_eq!((h.lsb, h.rsb), (69.0, 65.0));

        // e tightens the round on the right: round(55 * 0.9) = 50
        let e = read_side_bearings(&font, 'e');
        assert_eq!((e.lsb, e.rsb), (55.0, 50.0));
    }

    #[test]
    fn test_override_replaces_single_side() {
        let mut s = settings();
        s.overrides.insert('V', SideBearingPair::left(33.0));

        let mut font = latin_font();
        apply_tracy_method(&mut font, &s);

        let v = read_side_bearings(&font, 'V');
        assert_eq!((v.lsb, v.rsb), (33.0, 20.0));
    }

    #[test]
    fn test_override_on_master_wins() {
        let mut s = settings();
        s.overrides.insert('H', SideBearingPair::both(70.0, 75.0));

        let mut font = latin_font();
        apply_tracy_method(&mut font, &s);

        let h = read_side_bearings(&font, 'H');
        assert_eq!((h.lsb, h.rsb), (70.0, 75.0));
    }

    #[test]
    fn test_missing_glyphs_are_skipped() {
        let mut font = Font::new(FontInfo::default());
        font.push_glyph(boxed('H', 30.0, 430.0));
        // only 'H' exists; the other 51 letters must not panic
        apply_tracy_method(&mut font, &settings());
        let h = read_side_bearings(&font, 'H');
        assert_eq!((h.lsb, h.rsb), (80.0, 80.0));
    }

    #[test]
    fn test_application_is_deterministic_and_stable() {
        let mut font = latin_font();
        apply_tracy_method(&mut font, &settings());
        let first: Vec<_> = ('A'..='Z')
            .chain('a'..='z')
            .map(|c| {
                let g = font.glyph_for_char(c).unwrap();
                (g.bounds(), g.advance_width())
            })
            .collect();

        apply_tracy_method(&mut font, &settings());
        let second: Vec<_> = ('A'..='Z')
            .chain('a'..='z')
            .map(|c| {
                let g = font.glyph_for_char(c).unwrap();
                (g.bounds(), g.advance_width())
            })
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_advance_widths_stay_non_negative() {
        let mut font = latin_font();
        apply_tracy_method(&mut font, &settings());
        for glyph in font.glyphs() {
            assert!(glyph.advance_width() >= 0.0, "{}", glyph.name());
        }
    }
}
