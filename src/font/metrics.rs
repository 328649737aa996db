//! Font metrics and measurement data
//!
//! Global metrics carried alongside the glyph collection: units per em,
//! vertical extents, and the weight class the estimator scales stems by.

use tracing::debug;

use crate::font::data::Font;

/// Font-wide information and metrics
#[derive(Debug, Clone, PartialEq)]
pub struct FontInfo {
    pub family_name: String,
    pub style_name: String,
    pub units_per_em: f64,
    pub ascender: f64,
    pub descender: f64,
    /// OS/2-style weight class (400 = regular)
    pub weight_class: u16,
    pub x_height: Option<f64>,
    pub cap_height: Option<f64>,
}

impl Default for FontInfo {
    fn default() -> Self {
        Self {
            family_name: "Untitled".to_string(),
            style_name: "Regular".to_string(),
            units_per_em: 1000.0,
            ascender: 800.0,
            descender: -200.0,
            weight_class: 400,
            x_height: None,
            cap_height: None,
        }
    }
}

impl FontInfo {
    /// Get a display name combining family and style names
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [&self.family_name, &self.style_name]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect();

        if parts.is_empty() {
            "Untitled Font".to_string()
        } else {
            parts.join(" ")
        }
    }
}

impl Font {
    /// Fill in missing x-height and cap-height from glyph outlines.
    ///
    /// Fonts decoded without explicit vertical metrics estimate them from
    /// the bounds of 'x' and 'H'. Values already present are kept.
    pub fn estimate_missing_heights(&mut self) {
        if self.info.x_height.is_none() {
            if let Some(bounds) = self.glyph_for_char('x').and_then(|g| g.bounds()) {
                let height = bounds.height();
                debug!("estimated x-height {} from 'x' outline", height);
                self.info.x_height = Some(height);
            }
        }
        if self.info.cap_height.is_none() {
            if let Some(bounds) = self.glyph_for_char('H').and_then(|g| g.bounds()) {
                let height = bounds.height();
                debug!("estimated cap-height {} from 'H' outline", height);
                self.info.cap_height = Some(height);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::data::Glyph;
    use kurbo::BezPath;

    fn boxed(ch: char, x0: f64, y0: f64, x1: f64, y1: f64) -> Glyph {
        let mut path = BezPath::new();
        path.move_to((x0, y0));
        path.line_to((x1, y0));
        path.line_to((x1, y1));
        path.line_to((x0, y1));
        path.close_path();
        Glyph::new(ch.to_string(), Some(ch), path, x1 + x0)
    }

    #[test]
    fn test_estimate_heights_from_outlines() {
        let mut font = Font::new(FontInfo::default());
        font.push_glyph(boxed('x', 40.0, 0.0, 440.0, 480.0));
        font.push_glyph(boxed('H', 60.0, 0.0, 560.0, 700.0));

        font.estimate_missing_heights();
        assert_eq!(font.info.x_height, Some(480.0));
        assert_eq!(font.info.cap_height, Some(700.0));
    }

    #[test]
    fn test_explicit_heights_win() {
        let mut font = Font::new(FontInfo {
            x_height: Some(500.0),
            ..Default::default()
        });
        font.push_glyph(boxed('x', 40.0, 0.0, 440.0, 480.0));

        font.estimate_missing_heights();
        assert_eq!(font.info.x_height, Some(500.0));
        // no 'H' glyph: cap height stays unknown
        assert_eq!(font.info.cap_height, None);
    }
}
