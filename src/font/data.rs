//! Font and glyph data structures
//!
//! A `Font` owns its glyphs plus a character lookup; a `Glyph` owns its
//! outline and advance width. The glyph bounding box is cached and lazily
//! recomputed: any outline mutation clears the cache, so a stale box can
//! never be observed through the accessors.

use kurbo::{Affine, BezPath, Rect, Shape};
use std::cell::Cell;
use std::collections::HashMap;

use crate::font::metrics::FontInfo;

/// A single glyph: outline, advance width, and a cached bounding box
#[derive(Debug, Clone)]
pub struct Glyph {
    name: String,
    codepoint: Option<char>,
    outline: BezPath,
    advance_width: f64,
    /// None means the box must be recomputed from the outline on next read
    bounds: Cell<Option<Rect>>,
}

impl Glyph {
    /// Create a glyph from its outline and advance width
    pub fn new(
        name: impl Into<String>,
        codepoint: Option<char>,
        outline: BezPath,
        advance_width: f64,
    ) -> Self {
        Self {
            name: name.into(),
            codepoint,
            outline,
            advance_width,
            bounds: Cell::new(None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codepoint(&self) -> Option<char> {
        self.codepoint
    }

    pub fn outline(&self) -> &BezPath {
        &self.outline
    }

    pub fn advance_width(&self) -> f64 {
        self.advance_width
    }

    pub fn set_advance_width(&mut self, width: f64) {
        self.advance_width = width;
    }

    /// Whether the glyph has no outline (e.g. the space glyph)
    pub fn is_empty(&self) -> bool {
        self.outline.elements().is_empty()
    }

    /// Bounding box of the outline, or `None` for an empty outline.
    ///
    /// Recomputed lazily after a mutation and cached until the next one.
    pub fn bounds(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        if let Some(rect) = self.bounds.get() {
            return Some(rect);
        }
        let rect = self.outline.bounding_box();
        self.bounds.set(Some(rect));
        Some(rect)
    }

    /// Shift every coordinate of the outline horizontally by `dx`.
    ///
    /// Invalidates the cached bounding box.
    pub fn translate_x(&mut self, dx: f64) {
        if dx == 0.0 {
            return;
        }
        self.outline.apply_affine(Affine::translate((dx, 0.0)));
        self.bounds.set(None);
    }

    /// Replace the outline wholesale (codec use; invalidates the cache)
    pub fn set_outline(&mut self, outline: BezPath) {
        self.outline = outline;
        self.bounds.set(None);
    }
}

/// A mutable collection of glyphs with a character lookup and global metrics
#[derive(Debug, Clone, Default)]
pub struct Font {
    pub info: FontInfo,
    glyphs: Vec<Glyph>,
    charmap: HashMap<char, usize>,
}

impl Font {
    /// Create an empty font with the given info.
    ///
    /// A non-positive units-per-em is replaced with 1000 so that every
    /// coordinate in the model stays interpretable.
    pub fn new(info: FontInfo) -> Self {
        let mut info = info;
        if info.units_per_em <= 0.0 {
            tracing::warn!(
                "invalid units_per_em {}, falling back to 1000",
                info.units_per_em
            );
            info.units_per_em = 1000.0;
        }
        Self {
            info,
            glyphs: Vec::new(),
            charmap: HashMap::new(),
        }
    }

    /// Add a glyph, registering its codepoint in the character lookup.
    ///
    /// Returns the glyph's index. A repeated codepoint remaps the character
    /// to the newest glyph.
    pub fn push_glyph(&mut self, glyph: Glyph) -> usize {
        let index = self.glyphs.len();
        if let Some(ch) = glyph.codepoint() {
            self.charmap.insert(ch, index);
        }
        self.glyphs.push(glyph);
        index
    }

    pub fn glyph(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    pub fn glyph_mut(&mut self, index: usize) -> Option<&mut Glyph> {
        self.glyphs.get_mut(index)
    }

    /// Look up the glyph mapped to a character
    pub fn glyph_for_char(&self, ch: char) -> Option<&Glyph> {
        self.charmap.get(&ch).and_then(|&i| self.glyphs.get(i))
    }

    /// Mutable lookup of the glyph mapped to a character
    pub fn glyph_for_char_mut(&mut self, ch: char) -> Option<&mut Glyph> {
        let index = *self.charmap.get(&ch)?;
        self.glyphs.get_mut(index)
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn glyphs_mut(&mut self) -> impl Iterator<Item = &mut Glyph> {
        self.glyphs.iter_mut()
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}
