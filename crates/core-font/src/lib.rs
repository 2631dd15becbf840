//! Font capability consumed by the text layout engine.
//!
//! A font answers two questions: what is its nominal cell size
//! (`bounding_box`), and what glyph (if any) renders a given character code
//! (`glyph_for`). Everything else about a font (file format, rasterization,
//! caching) is deliberately outside this crate; `BitmapFont` is the in-memory
//! implementation used by the demo binary and the test suites.
//!
//! Coordinate conventions:
//! - `dx` is the horizontal bearing from the pen position to the glyph's left edge.
//! - `dy` is the height of the glyph's bottom edge above the baseline
//!   (descenders use negative values).
//! - `shift_x` is the pen advance after drawing the glyph.
//!
//! Glyphs are cheap to clone: the bitmap is shared through `Rc`.

use std::rc::Rc;

pub mod bitmap;
pub mod bitmap_font;

pub use bitmap::Bitmap;
pub use bitmap_font::{BitmapFont, BitmapFontBuilder};

/// Per-glyph metrics, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    pub width: u16,
    pub height: u16,
    pub dx: i16,
    pub dy: i16,
    pub shift_x: i16,
}

impl GlyphMetrics {
    pub const fn new(width: u16, height: u16, dx: i16, dy: i16, shift_x: i16) -> Self {
        Self {
            width,
            height,
            dx,
            dy,
            shift_x,
        }
    }
}

/// A font's rendering of one character.
#[derive(Debug, Clone)]
pub struct Glyph {
    /// Tile sheet holding this glyph's pixels.
    pub bitmap: Rc<Bitmap>,
    /// Index of this glyph's tile within `bitmap` (row-major, `width`x`height` tiles).
    pub tile_index: u16,
    pub width: u16,
    pub height: u16,
    pub dx: i16,
    pub dy: i16,
    pub shift_x: i16,
}

impl Glyph {
    pub fn new(bitmap: Rc<Bitmap>, tile_index: u16, metrics: GlyphMetrics) -> Self {
        Self {
            bitmap,
            tile_index,
            width: metrics.width,
            height: metrics.height,
            dx: metrics.dx,
            dy: metrics.dy,
            shift_x: metrics.shift_x,
        }
    }

    #[inline]
    pub fn metrics(&self) -> GlyphMetrics {
        GlyphMetrics::new(self.width, self.height, self.dx, self.dy, self.shift_x)
    }
}

/// Font capability.
pub trait Font {
    /// Nominal `(width, height)` of the font's glyph cell.
    fn bounding_box(&self) -> (u16, u16);

    /// Glyph for a character code, or `None` when the font does not cover it.
    fn glyph_for(&self, code: u32) -> Option<Glyph>;

    #[inline]
    fn glyph(&self, ch: char) -> Option<Glyph> {
        self.glyph_for(ch as u32)
    }

    /// True when `ch` would occupy a tile: not a line break and covered by the font.
    #[inline]
    fn is_visible(&self, ch: char) -> bool {
        ch != '\n' && self.glyph(ch).is_some()
    }
}

impl<F: Font + ?Sized> Font for &F {
    fn bounding_box(&self) -> (u16, u16) {
        (**self).bounding_box()
    }
    fn glyph_for(&self, code: u32) -> Option<Glyph> {
        (**self).glyph_for(code)
    }
}

impl<F: Font + ?Sized> Font for Rc<F> {
    fn bounding_box(&self) -> (u16, u16) {
        (**self).bounding_box()
    }
    fn glyph_for(&self, code: u32) -> Option<Glyph> {
        (**self).glyph_for(code)
    }
}

impl<F: Font + ?Sized> Font for Box<F> {
    fn bounding_box(&self) -> (u16, u16) {
        (**self).bounding_box()
    }
    fn glyph_for(&self, code: u32) -> Option<Glyph> {
        (**self).glyph_for(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarding_impls_reach_inner_font() {
        let font = BitmapFont::monospace((6, 8), "AB", GlyphMetrics::new(5, 8, 0, 0, 6));
        let by_ref: &BitmapFont = &font;
        let shared: Rc<BitmapFont> = Rc::new(font.clone());
        let boxed: Box<dyn Font> = Box::new(font.clone());
        assert_eq!(by_ref.bounding_box(), (6, 8));
        assert_eq!(shared.bounding_box(), (6, 8));
        assert!(boxed.glyph('A').is_some());
        assert!(boxed.glyph('Z').is_none());
    }

    #[test]
    fn newline_is_never_visible() {
        let font = BitmapFont::monospace((6, 8), "A\n", GlyphMetrics::new(5, 8, 0, 0, 6));
        assert!(font.is_visible('A'));
        assert!(!font.is_visible('\n'));
        assert!(!font.is_visible('?'));
    }

    #[test]
    fn metrics_roundtrip_through_glyph() {
        let m = GlyphMetrics::new(3, 5, -1, 2, 4);
        let g = Glyph::new(Rc::new(Bitmap::new(3, 5)), 0, m);
        assert_eq!(g.metrics(), m);
    }
}
