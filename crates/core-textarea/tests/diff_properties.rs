//! Property-based tests for slot reconciliation guarantees.

use core_display::TileId;
use core_font::{BitmapFont, Font, GlyphMetrics};
use core_textarea::{TextArea, TextAreaOptions};
use proptest::prelude::*;

const CAPACITY: usize = 64;

fn font() -> BitmapFont {
    BitmapFont::monospace((6, 8), "ABCDEFM", GlyphMetrics::new(5, 8, 0, 0, 6))
}

/// Strings over covered letters, newlines and uncovered characters.
fn text_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            6 => prop::sample::select(vec!['A', 'B', 'C', 'D', 'E', 'F', 'M']),
            1 => Just('\n'),
            1 => prop::sample::select(vec!['?', ' ', 'z']),
        ],
        0..40,
    )
    .prop_map(|chars: Vec<char>| chars.into_iter().collect::<String>())
}

fn visible(font: &BitmapFont, s: &str) -> Vec<char> {
    s.chars().filter(|&c| font.is_visible(c)).collect()
}

fn ids(area: &TextArea<BitmapFont>) -> Vec<TileId> {
    area.iter().map(|t| t.id()).collect()
}

fn fresh_area() -> TextArea<BitmapFont> {
    TextArea::new(font(), TextAreaOptions::with_max_glyphs(CAPACITY)).unwrap()
}

proptest! {
    // Slot count equals visible glyph count after every pass.
    #[test]
    fn slot_count_tracks_visible_glyphs(a in text_strategy(), b in text_strategy()) {
        let f = font();
        let mut area = fresh_area();
        area.set_text(&a).unwrap();
        prop_assert_eq!(area.len(), visible(&f, &a).len());
        area.set_text(&b).unwrap();
        prop_assert_eq!(area.len(), visible(&f, &b).len());
    }

    // Re-setting the same text never builds a tile.
    #[test]
    fn same_text_twice_is_reuse_only(prev in text_strategy(), s in text_strategy()) {
        let mut area = fresh_area();
        area.set_text(&prev).unwrap();
        area.set_text(&s).unwrap();
        let before = ids(&area);
        let report = area.set_text(&s).unwrap();
        prop_assert_eq!(report.created, 0);
        prop_assert_eq!(report.removed, 0);
        prop_assert_eq!(ids(&area), before);
    }

    // Tiles for the shared visible prefix keep their identity.
    #[test]
    fn shared_visible_prefix_is_reused(a in text_strategy(), b in text_strategy()) {
        let f = font();
        let mut area = fresh_area();
        area.set_text(&a).unwrap();
        let before = ids(&area);
        area.set_text(&b).unwrap();
        let after = ids(&area);
        let (va, vb) = (visible(&f, &a), visible(&f, &b));
        let k = va.iter().zip(&vb).take_while(|(x, y)| x == y).count();
        prop_assert_eq!(&after[..k], &before[..k]);
    }

    // Positions after an incremental pass equal those of a fresh layout.
    #[test]
    fn incremental_positions_match_fresh_layout(a in text_strategy(), b in text_strategy()) {
        let mut incremental = fresh_area();
        incremental.set_text(&a).unwrap();
        incremental.set_text(&b).unwrap();
        let mut fresh = fresh_area();
        fresh.set_text(&b).unwrap();
        let p1: Vec<_> = incremental.iter().map(|t| (t.position(), t.tile_index())).collect();
        let p2: Vec<_> = fresh.iter().map(|t| (t.position(), t.tile_index())).collect();
        prop_assert_eq!(p1, p2);
        prop_assert_eq!(incremental.bounding_box(), fresh.bounding_box());
    }

    // Shrinking to a visible prefix creates nothing.
    #[test]
    fn truncation_to_prefix_creates_nothing(a in text_strategy(), cut in 0usize..40) {
        let f = font();
        let mut area = fresh_area();
        area.set_text(&a).unwrap();
        let va = visible(&f, &a);
        let prefix: String = va.iter().take(cut.min(va.len())).collect();
        let report = area.set_text(&prefix).unwrap();
        prop_assert_eq!(report.created, 0);
        prop_assert_eq!(area.len(), prefix.chars().count());
    }
}
