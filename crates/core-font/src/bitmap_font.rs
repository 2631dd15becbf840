//! In-memory bitmap font.
//!
//! Glyphs are keyed by character code in an `ahash` map; lookups clone the
//! stored `Glyph` (an `Rc` bump plus a few integers). The nominal bounding box
//! is supplied by the builder rather than derived, mirroring how bitmap font
//! formats carry an explicit `FONTBOUNDINGBOX`.

use crate::{Bitmap, Font, Glyph, GlyphMetrics};
use ahash::RandomState;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct BitmapFont {
    bounding_box: (u16, u16),
    glyphs: HashMap<u32, Glyph, RandomState>,
}

impl BitmapFont {
    pub fn builder(width: u16, height: u16) -> BitmapFontBuilder {
        BitmapFontBuilder {
            bounding_box: (width, height),
            glyphs: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Font where every character of `chars` shares `metrics` and a solid tile.
    /// All glyphs live on one sheet, one tile per character in order.
    pub fn monospace(bounding_box: (u16, u16), chars: &str, metrics: GlyphMetrics) -> Self {
        let count = chars.chars().count() as u16;
        let mut sheet = Bitmap::new(metrics.width.saturating_mul(count.max(1)), metrics.height);
        sheet.fill_rect(0, 0, sheet.width(), sheet.height(), 1);
        let sheet = Rc::new(sheet);
        let mut builder = Self::builder(bounding_box.0, bounding_box.1);
        for (idx, ch) in chars.chars().enumerate() {
            builder = builder.glyph(ch, Glyph::new(sheet.clone(), idx as u16, metrics));
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Font for BitmapFont {
    fn bounding_box(&self) -> (u16, u16) {
        self.bounding_box
    }

    fn glyph_for(&self, code: u32) -> Option<Glyph> {
        self.glyphs.get(&code).cloned()
    }
}

#[derive(Debug)]
pub struct BitmapFontBuilder {
    bounding_box: (u16, u16),
    glyphs: HashMap<u32, Glyph, RandomState>,
}

impl BitmapFontBuilder {
    /// Register (or replace) the glyph for `ch`.
    pub fn glyph(mut self, ch: char, glyph: Glyph) -> Self {
        if self.glyphs.insert(ch as u32, glyph).is_some() {
            trace!(target: "font", code = ch as u32, "glyph_replaced");
        }
        self
    }

    /// Register a glyph cut from a shared sheet.
    pub fn sheet_glyph(
        self,
        ch: char,
        sheet: &Rc<Bitmap>,
        tile_index: u16,
        metrics: GlyphMetrics,
    ) -> Self {
        self.glyph(ch, Glyph::new(sheet.clone(), tile_index, metrics))
    }

    pub fn build(self) -> BitmapFont {
        BitmapFont {
            bounding_box: self.bounding_box,
            glyphs: self.glyphs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_registers_and_replaces() {
        let sheet = Rc::new(Bitmap::new(10, 8));
        let font = BitmapFont::builder(5, 8)
            .sheet_glyph('A', &sheet, 0, GlyphMetrics::new(5, 8, 0, 0, 6))
            .sheet_glyph('A', &sheet, 1, GlyphMetrics::new(5, 8, 0, 0, 7))
            .build();
        assert_eq!(font.len(), 1);
        let a = font.glyph('A').unwrap();
        assert_eq!(a.tile_index, 1);
        assert_eq!(a.shift_x, 7);
    }

    #[test]
    fn monospace_assigns_sequential_tiles_on_one_sheet() {
        let font = BitmapFont::monospace((6, 8), "XYZ", GlyphMetrics::new(5, 8, 0, 0, 6));
        let x = font.glyph('X').unwrap();
        let z = font.glyph('Z').unwrap();
        assert_eq!((x.tile_index, z.tile_index), (0, 2));
        assert!(Rc::ptr_eq(&x.bitmap, &z.bitmap));
        assert_eq!(x.bitmap.width(), 15);
        assert_eq!(z.bitmap.tile_pixel(z.tile_index, 5, 8, 4, 7), Some(1));
    }

    #[test]
    fn missing_code_is_none() {
        let font = BitmapFont::builder(5, 8).build();
        assert!(font.is_empty());
        assert!(font.glyph_for('q' as u32).is_none());
    }
}
