//! Incrementally updated text area rendered as glyph tiles.
//!
//! A `TextArea` owns a capacity-bounded list of tile slots, a 2-entry palette
//! (index 0 transparent, index 1 foreground) and the last text it laid out.
//! `set_text` runs one synchronous pass:
//! 1. Refuse a line spacing that would carry the pen outside pixel range over
//!    the text's line breaks.
//! 2. Lay out the whole new text (`core_layout::layout_text`).
//! 3. Refuse the pass if its visible glyph count exceeds capacity. Nothing has
//!    been touched by either refusal, so tiles, text and bounding box stay as
//!    they were.
//! 4. Reconcile tile slots against the previous text (`diff::reconcile`):
//!    unchanged characters keep their tile and only move; changed ones get a
//!    fresh tile; surplus slots are truncated.
//! 5. Store the new text and bounding box; record metrics.
//!
//! Update cost tracks the number of *changed* visible characters: setting the
//! same text twice builds zero tiles on the second pass.
//!
//! `set_line_spacing` only stores the multiplier. The new spacing takes effect
//! on the next `set_text`, which validates it; callers re-set the text to see it.
//!
//! Invariants (after every successful pass):
//! - `len() == visible glyph count of text()`.
//! - `len() <= capacity()`.
//! - Slot `i` shows the i-th visible glyph of `text()` at its laid-out position.
//!
//! Not thread-safe: the palette and glyph bitmaps are `Rc`-shared with the
//! tiles, which keeps the area on one thread.

use core_display::{Palette, Tile, TileSlots, TileSource};
use core_font::Font;
use core_layout::{
    BoundingBox, BoundsMode, LayoutParams, TextLayout, layout_text, vertical_travel_fits,
};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub mod diff;
pub mod error;
pub mod metrics;

pub use core_layout::DEFAULT_LINE_SPACING;
pub use diff::PassReport;
pub use error::TextAreaError;
pub use metrics::{TextAreaMetrics, TextAreaMetricsSnapshot};

pub const DEFAULT_COLOR: u32 = 0xFF_FFFF;

const BACKGROUND: usize = 0;
const FOREGROUND: usize = 1;

/// Construction parameters for a `TextArea`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAreaOptions {
    /// Initial text; laid out during construction when non-empty.
    pub text: Option<String>,
    /// Tile slot capacity. Defaults to the initial text's character count.
    pub max_glyphs: Option<usize>,
    /// Foreground color, 24-bit RGB.
    pub color: u32,
    pub line_spacing: f64,
    pub bounds_mode: BoundsMode,
}

impl Default for TextAreaOptions {
    fn default() -> Self {
        Self {
            text: None,
            max_glyphs: None,
            color: DEFAULT_COLOR,
            line_spacing: DEFAULT_LINE_SPACING,
            bounds_mode: BoundsMode::Compat,
        }
    }
}

impl TextAreaOptions {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_max_glyphs(max_glyphs: usize) -> Self {
        Self {
            max_glyphs: Some(max_glyphs),
            ..Self::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn max_glyphs(mut self, max_glyphs: usize) -> Self {
        self.max_glyphs = Some(max_glyphs);
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn bounds_mode(mut self, bounds_mode: BoundsMode) -> Self {
        self.bounds_mode = bounds_mode;
        self
    }

    /// Slot capacity implied by these options, if any.
    fn capacity(&self) -> Option<usize> {
        match self.max_glyphs {
            Some(n) if n > 0 => Some(n),
            _ => self
                .text
                .as_deref()
                .map(|t| t.chars().count())
                .filter(|&n| n > 0),
        }
    }
}

/// Whole nanoseconds in `d`, pinned at `u64::MAX`.
fn saturating_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

#[derive(Debug)]
pub struct TextArea<F: Font> {
    font: F,
    slots: TileSlots,
    palette: Palette,
    text: Option<String>,
    line_spacing: f64,
    bounds_mode: BoundsMode,
    bounding_box: BoundingBox,
    metrics: TextAreaMetrics,
}

impl<F: Font> TextArea<F> {
    pub fn new(font: F, options: TextAreaOptions) -> Result<Self, TextAreaError> {
        let capacity = options.capacity().ok_or(TextAreaError::MissingCapacity)?;

        let palette = Palette::new(2);
        palette.make_transparent(BACKGROUND);
        palette.set(FOREGROUND, options.color);

        let mut area = Self {
            font,
            slots: TileSlots::with_capacity(capacity),
            palette,
            text: None,
            line_spacing: options.line_spacing,
            bounds_mode: options.bounds_mode,
            bounding_box: BoundingBox::default(),
            metrics: TextAreaMetrics::default(),
        };
        debug!(target: "textarea", capacity, color = options.color, "text_area_created");

        if let Some(text) = options.text.as_deref().filter(|t| !t.is_empty()) {
            area.set_text(text)?;
        }
        Ok(area)
    }

    /// Last successfully laid-out text; `None` before the first pass.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the displayed text, reusing tile slots for unchanged glyphs.
    pub fn set_text(&mut self, text: &str) -> Result<PassReport, TextAreaError> {
        let started = Instant::now();
        self.check_line_spacing(text)?;
        let layout = layout_text(&self.font, text, self.layout_params());
        self.check_capacity(&layout)?;

        let report = diff::reconcile(
            &self.font,
            self.text.as_deref(),
            &layout,
            &mut self.slots,
            &self.palette,
        )?;
        self.text = Some(text.to_owned());
        self.bounding_box = layout.bounds;

        let elapsed_ns = saturating_nanos(started.elapsed());
        self.metrics.record_pass(&report, elapsed_ns);
        debug!(
            target: "textarea.diff",
            visible = report.visible,
            created = report.created,
            repositioned = report.repositioned,
            removed = report.removed,
            skipped = report.skipped,
            elapsed_ns,
            "pass_complete"
        );
        Ok(report)
    }

    fn check_capacity(&self, layout: &TextLayout) -> Result<(), TextAreaError> {
        let required = layout.visible();
        let capacity = self.slots.capacity();
        if required > capacity {
            self.metrics.record_rejection();
            warn!(target: "textarea", required, capacity, "capacity_overflow");
            return Err(TextAreaError::CapacityOverflow { required, capacity });
        }
        Ok(())
    }

    fn check_line_spacing(&self, text: &str) -> Result<(), TextAreaError> {
        let newlines = text.matches('\n').count();
        let font_height = self.font.bounding_box().1;
        if vertical_travel_fits(font_height, newlines, self.line_spacing) {
            return Ok(());
        }
        warn!(
            target: "textarea",
            line_spacing = self.line_spacing,
            newlines,
            font_height,
            "line_spacing_out_of_range"
        );
        Err(TextAreaError::LineSpacingOutOfRange {
            line_spacing: self.line_spacing,
            newlines,
        })
    }

    fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            line_spacing: self.line_spacing,
            bounds_mode: self.bounds_mode,
        }
    }

    pub fn line_spacing(&self) -> f64 {
        self.line_spacing
    }

    /// Store a new spacing multiplier. Does not relayout.
    pub fn set_line_spacing(&mut self, line_spacing: f64) {
        self.line_spacing = line_spacing;
    }

    pub fn bounds_mode(&self) -> BoundsMode {
        self.bounds_mode
    }

    /// Foreground color (palette index 1).
    pub fn color(&self) -> u32 {
        self.palette.get(FOREGROUND).unwrap_or_default()
    }

    /// Change the foreground color. Every tile sees it immediately through the shared palette.
    pub fn set_color(&mut self, color: u32) {
        self.palette.set(FOREGROUND, color);
    }

    /// `(left, top, width, height)` from the last pass, relative to the area origin.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.slots.iter()
    }

    pub fn metrics(&self) -> &TextAreaMetrics {
        &self.metrics
    }

    pub fn metrics_snapshot(&self) -> TextAreaMetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl<F: Font> TileSource for TextArea<F> {
    fn tiles(&self) -> &[Tile] {
        self.slots.as_slice()
    }

    fn palette(&self) -> &Palette {
        &self.palette
    }
}
