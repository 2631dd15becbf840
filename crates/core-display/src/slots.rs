//! Capacity-bounded tile slot list.
//!
//! Acts as a manual arena: slots are addressed by index, overwritten in place
//! when their content changes, and truncated from the tail when fewer tiles are
//! needed. Storage is reserved once for the full capacity so slot churn never
//! reallocates.

use crate::{DisplayError, Tile};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct TileSlots {
    tiles: Vec<Tile>,
    capacity: usize,
}

impl TileSlots {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tiles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.tiles.len() >= self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Append a tile after the last live slot.
    pub fn push(&mut self, tile: Tile) -> Result<(), DisplayError> {
        if self.is_full() {
            return Err(DisplayError::SlotsFull {
                capacity: self.capacity,
            });
        }
        self.tiles.push(tile);
        Ok(())
    }

    /// Replace the tile in an existing slot, returning the previous occupant.
    pub fn overwrite(&mut self, index: usize, tile: Tile) -> Result<Tile, DisplayError> {
        let len = self.tiles.len();
        match self.tiles.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, tile)),
            None => Err(DisplayError::SlotOutOfRange { index, len }),
        }
    }

    /// Overwrite slot `index` when live, otherwise append. `index` may be at most `len()`.
    pub fn put(&mut self, index: usize, tile: Tile) -> Result<(), DisplayError> {
        if index < self.tiles.len() {
            self.overwrite(index, tile).map(|_| ())
        } else if index == self.tiles.len() {
            self.push(tile)
        } else {
            Err(DisplayError::SlotOutOfRange {
                index,
                len: self.tiles.len(),
            })
        }
    }

    /// Drop every slot at index `>= len`. Returns the number of slots removed.
    pub fn truncate(&mut self, len: usize) -> usize {
        let removed = self.tiles.len().saturating_sub(len);
        if removed > 0 {
            self.tiles.truncate(len);
            trace!(target: "display.slots", removed, len, "slots_truncated");
        }
        removed
    }

    pub fn clear(&mut self) -> usize {
        self.truncate(0)
    }
}

impl<'a> IntoIterator for &'a TileSlots {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
