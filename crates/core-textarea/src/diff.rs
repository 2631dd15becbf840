//! Tile slot reconciliation against the previously rendered text.
//!
//! Walks the new layout's placements and the previous text's *visible*
//! characters in lockstep. Slot `i` always holds the i-th visible glyph of the
//! previous text, so the i-th visible character of the old text is the content
//! currently drawn by slot `i`:
//! - same character and slot live => keep the tile, rewrite its position only;
//! - otherwise => build a new tile and overwrite slot `i` (or append).
//!
//! Old characters that never had a tile (line breaks, characters the font
//! lacks) are skipped by the old-side cursor, including any leading ones, so
//! the two cursors stay aligned on visible glyphs. After the walk every slot at
//! index `>= visible` is truncated.
//!
//! Capacity is the caller's responsibility: `reconcile` must only be invoked
//! once the layout is known to fit, otherwise a `SlotsFull` error can surface
//! with the slot list already partially rewritten.

use core_display::{DisplayError, Palette, Tile, TileSlots};
use core_font::Font;
use core_layout::TextLayout;

/// What one pass did to the tile slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassReport {
    /// Visible glyphs in the new text (== live slots after the pass).
    pub visible: usize,
    /// Tiles built from scratch.
    pub created: usize,
    /// Tiles reused with only a position write.
    pub repositioned: usize,
    /// Trailing slots dropped.
    pub removed: usize,
    /// New-text characters the font had no glyph for.
    pub skipped: usize,
}

impl PassReport {
    /// True when no tile had to be built or dropped.
    #[inline]
    pub fn is_reuse_only(&self) -> bool {
        self.created == 0 && self.removed == 0
    }
}

pub fn reconcile<F: Font + ?Sized>(
    font: &F,
    previous: Option<&str>,
    layout: &TextLayout,
    slots: &mut TileSlots,
    palette: &Palette,
) -> Result<PassReport, DisplayError> {
    let mut old_visible = previous
        .unwrap_or_default()
        .chars()
        .filter(|&c| font.is_visible(c));

    let mut report = PassReport {
        visible: layout.visible(),
        skipped: layout.skipped,
        ..PassReport::default()
    };

    for (i, placement) in layout.placements.iter().enumerate() {
        let unchanged = old_visible.next() == Some(placement.ch);
        match slots.get_mut(i) {
            Some(tile) if unchanged => {
                tile.set_position(placement.position);
                report.repositioned += 1;
            }
            _ => {
                let tile = Tile::for_glyph(&placement.glyph, palette, placement.position);
                slots.put(i, tile)?;
                report.created += 1;
            }
        }
    }

    report.removed = slots.truncate(layout.visible());
    Ok(report)
}
