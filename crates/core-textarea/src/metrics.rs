//! Text area pass metrics.
//!
//! Cumulative counters across every layout pass of one text area. The per-pass
//! `PassReport` says what a single `set_text` did; these say what the area has
//! done over its lifetime, which is what tuning slot reuse needs.

use crate::diff::PassReport;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct TextAreaMetrics {
    /// Completed layout passes (rejected passes excluded).
    pub passes: AtomicU64,
    /// Tiles built from scratch (overwrites + appends).
    pub tiles_created: AtomicU64,
    /// Slots kept and only moved.
    pub tiles_repositioned: AtomicU64,
    /// Slots dropped from the tail.
    pub tiles_removed: AtomicU64,
    /// Characters skipped because the font had no glyph.
    pub glyphs_skipped: AtomicU64,
    /// Passes refused because the text exceeded capacity.
    pub capacity_rejections: AtomicU64,
    /// Duration (ns) of the most recent completed pass.
    pub last_pass_ns: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextAreaMetricsSnapshot {
    pub passes: u64,
    pub tiles_created: u64,
    pub tiles_repositioned: u64,
    pub tiles_removed: u64,
    pub glyphs_skipped: u64,
    pub capacity_rejections: u64,
    pub last_pass_ns: u64,
}

impl TextAreaMetrics {
    pub fn record_pass(&self, report: &PassReport, elapsed_ns: u64) {
        self.passes.fetch_add(1, Ordering::Relaxed);
        self.tiles_created
            .fetch_add(report.created as u64, Ordering::Relaxed);
        self.tiles_repositioned
            .fetch_add(report.repositioned as u64, Ordering::Relaxed);
        self.tiles_removed
            .fetch_add(report.removed as u64, Ordering::Relaxed);
        self.glyphs_skipped
            .fetch_add(report.skipped as u64, Ordering::Relaxed);
        self.last_pass_ns.store(elapsed_ns, Ordering::Relaxed);
    }

    pub fn record_rejection(&self) {
        self.capacity_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> TextAreaMetricsSnapshot {
        TextAreaMetricsSnapshot {
            passes: self.passes.load(Ordering::Relaxed),
            tiles_created: self.tiles_created.load(Ordering::Relaxed),
            tiles_repositioned: self.tiles_repositioned.load(Ordering::Relaxed),
            tiles_removed: self.tiles_removed.load(Ordering::Relaxed),
            glyphs_skipped: self.glyphs_skipped.load(Ordering::Relaxed),
            capacity_rejections: self.capacity_rejections.load(Ordering::Relaxed),
            last_pass_ns: self.last_pass_ns.load(Ordering::Relaxed),
        }
    }
}
