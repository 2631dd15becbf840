//! Structured log output of layout passes.

use core_font::{BitmapFont, GlyphMetrics};
use core_testutil::capture_logs;
use core_textarea::{TextArea, TextAreaOptions};
use tracing::Level;

fn font() -> BitmapFont {
    BitmapFont::monospace((6, 8), "ABM", GlyphMetrics::new(5, 8, 0, 0, 6))
}

#[test]
fn pass_summary_logged_under_diff_target() {
    let ((), log) = capture_logs(Level::DEBUG, || {
        let mut area = TextArea::new(font(), TextAreaOptions::with_max_glyphs(4)).unwrap();
        area.set_text("AB").unwrap();
        area.set_text("AB").unwrap();
    });
    assert!(log.contains("DEBUG textarea.diff:"));
    assert!(log.contains("pass_complete"));
    assert!(log.contains("created=0"));
    assert!(log.contains("repositioned=2"));
}

#[test]
fn overflow_logged_as_warning() {
    let ((), log) = capture_logs(Level::WARN, || {
        let mut area = TextArea::new(font(), TextAreaOptions::with_max_glyphs(1)).unwrap();
        let _ = area.set_text("AB");
    });
    assert!(log.contains("WARN textarea:"));
    assert!(log.contains("capacity_overflow"));
    assert!(log.contains("required=2"));
    assert!(!log.contains("pass_complete"));
}

#[test]
fn layout_trace_reports_skips() {
    let ((), log) = capture_logs(Level::TRACE, || {
        let mut area = TextArea::new(font(), TextAreaOptions::with_max_glyphs(4)).unwrap();
        area.set_text("A?\nB").unwrap();
    });
    assert!(log.contains("TRACE textarea.layout:"));
    assert!(log.contains("skipped=1"));
    assert!(log.contains("newlines=1"));
}

#[test]
fn refused_line_spacing_logged_as_warning() {
    let ((), log) = capture_logs(Level::WARN, || {
        let mut area = TextArea::new(font(), TextAreaOptions::with_max_glyphs(4)).unwrap();
        area.set_line_spacing(1.0e9);
        let _ = area.set_text("A\nB");
    });
    assert!(log.contains("WARN textarea:"));
    assert!(log.contains("line_spacing_out_of_range"));
    assert!(log.contains("newlines=1"));
}
