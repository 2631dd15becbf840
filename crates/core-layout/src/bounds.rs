//! Bounding box accumulation for a single layout pass.
//!
//! The tracker starts every pass at `left = right = top = bottom = 0` and only
//! ever widens. In `BoundsMode::Compat` the left edge is never moved, matching
//! the long-standing behavior consumers position against; glyphs with a
//! negative bearing therefore hang outside the reported box. `TrackLeft`
//! follows the leftmost tile edge and reports `width = right - left`.

use core_font::Glyph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsMode {
    #[default]
    Compat,
    TrackLeft,
}

/// `(left, top, width, height)` in pixels, relative to the area origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn as_tuple(&self) -> (i32, i32, i32, i32) {
        (self.left, self.top, self.width, self.height)
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BoundsTracker {
    mode: BoundsMode,
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
}

impl BoundsTracker {
    pub fn new(mode: BoundsMode) -> Self {
        Self {
            mode,
            left: 0,
            right: 0,
            top: 0,
            bottom: 0,
        }
    }

    /// Fold one drawn glyph at pen `(x, y)` into the running extents.
    pub fn observe(&mut self, x: i32, y: i32, y_offset: i32, glyph: &Glyph) {
        self.right = self.right.max(x + glyph.width as i32);
        // Ascender height comes from the first line only.
        if y == 0 {
            self.top = self.top.min(-(glyph.height as i32) + y_offset);
        }
        self.bottom = self.bottom.max(y - glyph.dy as i32 + y_offset);
        if self.mode == BoundsMode::TrackLeft {
            self.left = self.left.min(x + glyph.dx as i32);
        }
    }

    pub fn finish(&self) -> BoundingBox {
        let width = match self.mode {
            BoundsMode::Compat => self.left + self.right,
            BoundsMode::TrackLeft => self.right - self.left,
        };
        BoundingBox::new(self.left, self.top, width, self.bottom - self.top)
    }
}
