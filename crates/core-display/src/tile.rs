//! Positioned glyph tiles.

use crate::Palette;
use core_font::{Bitmap, Glyph};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TILE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique tile identity. Survives repositioning; a rebuilt tile gets a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(u64);

impl TileId {
    fn next() -> Self {
        TileId(NEXT_TILE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Tile {
    id: TileId,
    bitmap: Rc<Bitmap>,
    palette: Palette,
    tile_index: u16,
    tile_width: u16,
    tile_height: u16,
    position: (i32, i32),
}

impl Tile {
    pub fn new(
        bitmap: Rc<Bitmap>,
        palette: Palette,
        tile_index: u16,
        tile_width: u16,
        tile_height: u16,
        position: (i32, i32),
    ) -> Self {
        Self {
            id: TileId::next(),
            bitmap,
            palette,
            tile_index,
            tile_width,
            tile_height,
            position,
        }
    }

    /// Tile showing `glyph`, sized to the glyph and bound to `palette`.
    pub fn for_glyph(glyph: &Glyph, palette: &Palette, position: (i32, i32)) -> Self {
        Self::new(
            glyph.bitmap.clone(),
            palette.clone(),
            glyph.tile_index,
            glyph.width,
            glyph.height,
            position,
        )
    }

    #[inline]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: (i32, i32)) {
        self.position = position;
    }

    #[inline]
    pub fn tile_index(&self) -> u16 {
        self.tile_index
    }

    #[inline]
    pub fn size(&self) -> (u16, u16) {
        (self.tile_width, self.tile_height)
    }

    pub fn bitmap(&self) -> &Rc<Bitmap> {
        &self.bitmap
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index of tile-local pixel `(x, y)`.
    pub fn pixel(&self, x: u16, y: u16) -> Option<u8> {
        self.bitmap
            .tile_pixel(self.tile_index, self.tile_width, self.tile_height, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_font::GlyphMetrics;

    #[test]
    fn ids_are_unique_and_survive_reposition() {
        let bmp = Rc::new(Bitmap::new(4, 4));
        let pal = Palette::new(2);
        let mut a = Tile::new(bmp.clone(), pal.clone(), 0, 4, 4, (0, 0));
        let b = Tile::new(bmp, pal, 0, 4, 4, (0, 0));
        assert_ne!(a.id(), b.id());
        let before = a.id();
        a.set_position((3, -2));
        assert_eq!(a.id(), before);
        assert_eq!(a.position(), (3, -2));
    }

    #[test]
    fn for_glyph_copies_geometry_and_samples_sheet() {
        let mut sheet = Bitmap::new(6, 2);
        sheet.fill_rect(3, 0, 3, 2, 1);
        let glyph = Glyph::new(Rc::new(sheet), 1, GlyphMetrics::new(3, 2, 0, 0, 4));
        let pal = Palette::new(2);
        let t = Tile::for_glyph(&glyph, &pal, (5, 6));
        assert_eq!(t.size(), (3, 2));
        assert_eq!(t.tile_index(), 1);
        assert_eq!(t.pixel(0, 0), Some(1));
        assert!(t.palette().ptr_eq(&pal));
        assert!(Rc::ptr_eq(t.bitmap(), &glyph.bitmap));
    }
}
