//! Tile-addressed display primitives.
//!
//! This crate models the small part of a tile-compositing display surface that
//! text rendering touches:
//! - `Palette`: shared, mutable color table with per-entry transparency.
//! - `Tile`: a positioned reference to one glyph tile plus a palette binding.
//! - `TileSlots`: capacity-bounded, index-addressed tile list with explicit
//!   push / overwrite / truncate operations.
//! - `TileSource`: read-only view a compositor consumes (ordered tiles + palette).
//!
//! Invariants:
//! - `TileSlots::len() <= TileSlots::capacity()` at all times; growth past
//!   capacity is refused with `DisplayError::SlotsFull`.
//! - Live slots are contiguous (`0..len`); there are no holes.
//! - A `TileId` is allocated once per constructed tile and never reused within
//!   a process, so slot reuse versus replacement is observable by id.
//!
//! Threading: palettes and bitmaps are shared via `Rc`, so every type here is
//! `!Send`. The owning text area is single-threaded.

use thiserror::Error;

pub mod palette;
pub mod slots;
pub mod tile;

pub use palette::{EntryFlags, Palette, PaletteEntry};
pub use slots::TileSlots;
pub use tile::{Tile, TileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("tile slots full (capacity {capacity})")]
    SlotsFull { capacity: usize },
    #[error("tile slot {index} out of range (len {len})")]
    SlotOutOfRange { index: usize, len: usize },
}

/// Read-only tile collection consumed by a compositor.
pub trait TileSource {
    /// Tiles in draw order.
    fn tiles(&self) -> &[Tile];
    /// Palette every tile of this source is bound to.
    fn palette(&self) -> &Palette;
}
