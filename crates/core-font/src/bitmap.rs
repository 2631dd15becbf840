//! Palette-indexed bitmaps used as glyph tile sheets.
//!
//! A bitmap stores one palette index per pixel (row-major). Glyph bitmaps are
//! usually sheets: a grid of equally sized tiles addressed by `tile_index`,
//! counting left to right, then top to bottom.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Blank bitmap (every pixel palette index 0).
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Build from textual rows: `'#'` (or any non-space, non-`.` char) sets index 1.
    /// Short rows are padded with index 0; long rows are cut at `width`.
    pub fn from_rows(width: u16, rows: &[&str]) -> Self {
        let mut bmp = Self::new(width, rows.len() as u16);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(width as usize).enumerate() {
                if ch != ' ' && ch != '.' {
                    bmp.set(x as u16, y as u16, 1);
                }
            }
        }
        bmp
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<u8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set a pixel; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, value: u8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = value;
        }
    }

    /// Fill a rectangle clipped to the bitmap.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, value: u8) {
        for yy in y..y.saturating_add(h).min(self.height) {
            for xx in x..x.saturating_add(w).min(self.width) {
                self.set(xx, yy, value);
            }
        }
    }

    /// Number of `tile_w`-wide tiles per sheet row (0 when the sheet is narrower).
    pub fn tiles_per_row(&self, tile_w: u16) -> u16 {
        if tile_w == 0 { 0 } else { self.width / tile_w }
    }

    /// Sample pixel `(x, y)` of tile `tile_index` when the sheet is cut into
    /// `tile_w`x`tile_h` tiles. `None` for coordinates outside the tile or
    /// tiles outside the sheet.
    pub fn tile_pixel(
        &self,
        tile_index: u16,
        tile_w: u16,
        tile_h: u16,
        x: u16,
        y: u16,
    ) -> Option<u8> {
        if x >= tile_w || y >= tile_h {
            return None;
        }
        let per_row = self.tiles_per_row(tile_w);
        if per_row == 0 {
            return None;
        }
        let origin_x = (tile_index % per_row) as u32 * tile_w as u32;
        let origin_y = (tile_index / per_row) as u32 * tile_h as u32;
        let sx = u16::try_from(origin_x + x as u32).ok()?;
        let sy = u16::try_from(origin_y + y as u32).ok()?;
        self.get(sx, sy)
    }
}
