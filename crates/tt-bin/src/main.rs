//! tiletext entrypoint.
//!
//! Applies each TEXT argument in order to one text area built on the demo
//! font and reports, per pass, how many tiles were built, moved or dropped,
//! the resulting bounding box and an ASCII preview.
use anyhow::Result;
use clap::Parser;
use core_config::{clamp_line_spacing, load_from};
use core_font::BitmapFont;
use core_layout::BoundsMode;
use core_textarea::{PassReport, TextArea, TextAreaError, TextAreaOptions};
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod demo_font;
mod preview;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "tiletext", version, about = "Tile text area demo")]
struct Args {
    /// Texts applied in order. `\n` inside an argument becomes a line break.
    #[arg(required = true)]
    texts: Vec<String>,
    /// Optional configuration file path (overrides discovery of `tiletext.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
    /// Tile slot capacity (defaults to config, then to the first text's length).
    #[arg(long)]
    max_glyphs: Option<usize>,
    /// Line spacing multiplier, clamped like the config value.
    #[arg(long)]
    line_spacing: Option<f64>,
    /// Foreground color as hex RGB (`FF8800`, `#FF8800` or `0xFF8800`).
    #[arg(long, value_parser = parse_color)]
    color: Option<u32>,
    /// Report the leftmost glyph edge in the bounding box.
    #[arg(long)]
    track_left: bool,
    #[arg(long)]
    no_preview: bool,
}

fn parse_color(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix('#'))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16)
        .map(|c| c & 0x00FF_FFFF)
        .map_err(|e| format!("invalid color `{s}`: {e}"))
}

/// Decode `\n` and `\\` escapes typed on the command line.
fn decode_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Log file in the working directory, replaced on every run.
const LOG_FILE: &str = "tiletext.log";
/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "info";

/// Send `tracing` output to `LOG_FILE` under `dir`. The returned guard flushes
/// the file when dropped; `None` when a global subscriber is already set.
fn init_logging(dir: &Path) -> Option<WorkerGuard> {
    let _ = std::fs::remove_file(dir.join(LOG_FILE));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, LOG_FILE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .ok()
        .map(|()| guard)
}

/// Record panic payload and location in the log, then run the previous hook.
fn install_panic_logging() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("<non-string payload>");
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        error!(target: "runtime.panic", payload, location = location.as_deref(), "panic");
        previous(info);
    }));
}

/// Merge CLI flags over config values into text area options for `first_text`.
fn build_options(args: &Args, config: &core_config::Config, first_text: String) -> TextAreaOptions {
    let bounds_mode = if args.track_left || config.track_left() {
        BoundsMode::TrackLeft
    } else {
        BoundsMode::Compat
    };
    let mut options = TextAreaOptions::with_text(first_text)
        .color(args.color.unwrap_or_else(|| config.color()))
        .line_spacing(
            args.line_spacing
                .map(clamp_line_spacing)
                .unwrap_or_else(|| config.effective_line_spacing()),
        )
        .bounds_mode(bounds_mode);
    if let Some(n) = args.max_glyphs.or_else(|| config.max_glyphs()) {
        options = options.max_glyphs(n);
    }
    options
}

fn print_pass(
    out: &mut impl Write,
    area: &TextArea<BitmapFont>,
    text: &str,
    report: &PassReport,
    preview: bool,
) -> Result<()> {
    let (left, top, width, height) = area.bounding_box().as_tuple();
    writeln!(out, "text {text:?}")?;
    writeln!(
        out,
        "  tiles {}/{}  created {}  repositioned {}  removed {}  skipped {}",
        area.len(),
        area.capacity(),
        report.created,
        report.repositioned,
        report.removed,
        report.skipped
    )?;
    writeln!(out, "  bounding box ({left}, {top}, {width}, {height})")?;
    if preview {
        for row in preview::render_ascii(area) {
            writeln!(out, "  {row}")?;
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = load_from(args.config.clone())?;
    let texts: Vec<String> = args.texts.iter().map(|t| decode_escapes(t)).collect();
    let Some((first, rest)) = texts.split_first() else {
        return Ok(());
    };

    let options = build_options(&args, &config, first.clone());
    let mut area = TextArea::new(demo_font::demo_font(), options)?;
    info!(
        target: "runtime.startup",
        capacity = area.capacity(),
        line_spacing = area.line_spacing(),
        color = area.color(),
        config = config.source.as_ref().map(|p| p.display().to_string()).as_deref(),
        "text_area_ready"
    );

    let mut out = stdout().lock();
    let initial = PassReport {
        visible: area.len(),
        created: area.len(),
        ..PassReport::default()
    };
    print_pass(&mut out, &area, first, &initial, !args.no_preview)?;

    for text in rest {
        match area.set_text(text) {
            Ok(report) => print_pass(&mut out, &area, text, &report, !args.no_preview)?,
            Err(
                e @ (TextAreaError::CapacityOverflow { .. }
                | TextAreaError::LineSpacingOutOfRange { .. }),
            ) => {
                error!(target: "runtime", error = %e, "pass_rejected");
                writeln!(out, "text {text:?}\n  rejected: {e}")?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    let snap = area.metrics_snapshot();
    writeln!(
        out,
        "passes {}  created {}  repositioned {}  removed {}  rejected {}",
        snap.passes,
        snap.tiles_created,
        snap.tiles_repositioned,
        snap.tiles_removed,
        snap.capacity_rejections
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let _log_guard = init_logging(Path::new("."));
    install_panic_logging();
    info!(target: "runtime", "startup");

    let args = Args::parse();
    let result = run(args);
    if let Err(e) = &result {
        error!(target: "runtime", error = %e, "run_failed");
    }
    result
}
