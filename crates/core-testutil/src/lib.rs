//! Shared test helpers. Dev-dependency only.
//!
//! `capture_logs` runs a closure under a scoped fmt subscriber and returns the
//! formatted output, so tests can assert on targets, levels and event fields:
//!
//! ```text
//! DEBUG textarea.diff: pass_complete visible=2 created=0 ...
//! ```

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink. Clones append to the same buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with events at `level` and above captured; returns its result and the log text.
/// No timestamps or ANSI codes; each line starts with `LEVEL target:`.
pub fn capture_logs<R>(level: Level, f: impl FnOnce() -> R) -> (R, String) {
    let buffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .with_writer(buffer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_only_events_at_or_above_level() {
        let ((), log) = capture_logs(Level::INFO, || {
            tracing::info!(target: "demo", answer = 42, "kept");
            tracing::debug!(target: "demo", "dropped");
        });
        assert!(log.contains("INFO demo: kept answer=42"));
        assert!(!log.contains("dropped"));
    }

    #[test]
    fn returns_closure_result() {
        let (n, log) = capture_logs(Level::WARN, || 7);
        assert_eq!(n, 7);
        assert!(log.is_empty());
    }
}
