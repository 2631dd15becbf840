//! Shared color palette.
//!
//! `Palette` is a handle: clones share the same entries, so a color change made
//! through the owning text area is seen by every tile bound to it without
//! rebinding tiles. Entries hold 24-bit RGB plus flags.

use bitflags::bitflags;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EntryFlags: u8 {
        const TRANSPARENT = 0b0000_0001; // skipped by compositors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteEntry {
    /// 24-bit RGB.
    pub color: u32,
    pub flags: EntryFlags,
}

impl PaletteEntry {
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.flags.contains(EntryFlags::TRANSPARENT)
    }
}

#[derive(Debug, Clone)]
pub struct Palette {
    entries: Rc<RefCell<SmallVec<[PaletteEntry; 2]>>>,
}

impl Palette {
    /// Palette of `len` opaque black entries.
    pub fn new(len: usize) -> Self {
        let entries: SmallVec<[PaletteEntry; 2]> =
            std::iter::repeat_n(PaletteEntry::default(), len).collect();
        Self {
            entries: Rc::new(RefCell::new(entries)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.entries.borrow().get(index).map(|e| e.color)
    }

    pub fn entry(&self, index: usize) -> Option<PaletteEntry> {
        self.entries.borrow().get(index).copied()
    }

    /// Set an entry's color (masked to 24 bits). Out-of-range indices are ignored.
    pub fn set(&self, index: usize, color: u32) {
        if let Some(e) = self.entries.borrow_mut().get_mut(index) {
            e.color = color & 0x00FF_FFFF;
        }
    }

    pub fn make_transparent(&self, index: usize) {
        if let Some(e) = self.entries.borrow_mut().get_mut(index) {
            e.flags |= EntryFlags::TRANSPARENT;
        }
    }

    pub fn make_opaque(&self, index: usize) {
        if let Some(e) = self.entries.borrow_mut().get_mut(index) {
            e.flags.remove(EntryFlags::TRANSPARENT);
        }
    }

    pub fn is_transparent(&self, index: usize) -> bool {
        self.entry(index).is_some_and(|e| e.is_transparent())
    }

    /// True when both handles share the same entries.
    pub fn ptr_eq(&self, other: &Palette) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}
