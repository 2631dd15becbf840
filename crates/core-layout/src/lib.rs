//! Text layout engine: pen positions for every visible glyph of a string.
//!
//! Walks the text once, character by character:
//! - `'\n'` moves the pen to the start of the next line
//!   (`y += trunc(font_height * line_spacing)`), producing no placement.
//! - Characters the font does not cover are skipped: no placement, no advance,
//!   no bounding-box contribution.
//! - Every other character yields a `Placement` at
//!   `(x + dx, y - height - dy + y_offset)` and advances the pen by `shift_x`.
//!
//! Vertical centering: `y_offset = trunc((h_M - newlines * font_height * spacing) / 2)`
//! where `h_M` is the height of the font's `M` glyph (falling back to the
//! nominal font height when the font has no `M`). This centers multi-line text
//! around the single-line baseline and assumes every line shares the font's
//! nominal height. Consumers position labels against these exact numbers, so
//! the heuristic is kept as is.
//!
//! Invariants:
//! - `placements[i]` is the i-th visible glyph of the text, in text order.
//! - `placements.len() + skipped + newlines == text.chars().count()`.
//! - The bounding box is computed from scratch on every call.

use core_font::{Font, Glyph};
use tracing::trace;

pub mod bounds;

pub use bounds::{BoundingBox, BoundsMode, BoundsTracker};

pub const DEFAULT_LINE_SPACING: f64 = 1.25;

/// Largest vertical pen travel, in pixels, a layout may span. Leaves headroom
/// for the centering offset and glyph extents within `i32` pixel space.
pub const MAX_VERTICAL_TRAVEL: f64 = (i32::MAX / 4) as f64;

/// Character whose glyph height anchors vertical centering.
const REFERENCE_CHAR: char = 'M';

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Multiplier on the font's nominal height giving the inter-line advance.
    pub line_spacing: f64,
    pub bounds_mode: BoundsMode,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            line_spacing: DEFAULT_LINE_SPACING,
            bounds_mode: BoundsMode::Compat,
        }
    }
}

/// One visible glyph and where its tile goes.
#[derive(Debug, Clone)]
pub struct Placement {
    /// Index of the character within the laid-out text (in chars, not bytes).
    pub char_index: usize,
    pub ch: char,
    pub glyph: Glyph,
    /// Tile origin (top-left) relative to the area origin.
    pub position: (i32, i32),
}

#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    pub placements: Vec<Placement>,
    pub bounds: BoundingBox,
    pub newlines: usize,
    /// Characters dropped because the font has no glyph for them.
    pub skipped: usize,
    pub y_offset: i32,
}

impl TextLayout {
    #[inline]
    pub fn visible(&self) -> usize {
        self.placements.len()
    }
}

/// Inter-line advance in pixels for a font height and spacing multiplier.
#[inline]
pub fn line_advance(font_height: u16, line_spacing: f64) -> i32 {
    (font_height as f64 * line_spacing) as i32
}

/// Whether `newlines` line breaks at `line_spacing` stay inside `i32` pixel space.
///
/// Non-finite spacings never fit. Any finite spacing fits a single line since
/// the advance is never applied.
pub fn vertical_travel_fits(font_height: u16, newlines: usize, line_spacing: f64) -> bool {
    if !line_spacing.is_finite() {
        return false;
    }
    let travel = (font_height as f64 * line_spacing).abs() * newlines as f64;
    travel <= MAX_VERTICAL_TRAVEL
}

/// Baseline correction centering `newlines + 1` lines around the single-line baseline.
pub fn baseline_offset<F: Font + ?Sized>(font: &F, newlines: usize, line_spacing: f64) -> i32 {
    let font_height = font.bounding_box().1;
    let reference = font
        .glyph(REFERENCE_CHAR)
        .map(|g| g.height)
        .unwrap_or(font_height);
    ((reference as f64 - newlines as f64 * font_height as f64 * line_spacing) / 2.0) as i32
}

/// Lay out `text` with `font`.
///
/// `params.line_spacing` must satisfy `vertical_travel_fits` for the text's
/// line breaks; larger spacings overflow pixel coordinates.
pub fn layout_text<F: Font + ?Sized>(font: &F, text: &str, params: LayoutParams) -> TextLayout {
    let font_height = font.bounding_box().1;
    let advance = line_advance(font_height, params.line_spacing);
    let newlines = text.matches('\n').count();
    let y_offset = baseline_offset(font, newlines, params.line_spacing);

    let mut placements = Vec::with_capacity(text.len().saturating_sub(newlines));
    let mut bounds = BoundsTracker::new(params.bounds_mode);
    let mut skipped = 0usize;
    let (mut x, mut y) = (0i32, 0i32);

    for (char_index, ch) in text.chars().enumerate() {
        if ch == '\n' {
            y += advance;
            x = 0;
            continue;
        }
        let Some(glyph) = font.glyph(ch) else {
            skipped += 1;
            continue;
        };
        bounds.observe(x, y, y_offset, &glyph);
        let position = (
            x + glyph.dx as i32,
            y - glyph.height as i32 - glyph.dy as i32 + y_offset,
        );
        x += glyph.shift_x as i32;
        placements.push(Placement {
            char_index,
            ch,
            glyph,
            position,
        });
    }

    let bounds = bounds.finish();
    trace!(
        target: "textarea.layout",
        visible = placements.len(),
        newlines,
        skipped,
        y_offset,
        left = bounds.left,
        top = bounds.top,
        width = bounds.width,
        height = bounds.height,
        "layout_complete"
    );
    TextLayout {
        placements,
        bounds,
        newlines,
        skipped,
        y_offset,
    }
}
