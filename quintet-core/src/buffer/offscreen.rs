//! Off-screen compositing buffer
//!
//! Holds pre-lookup "logical" brightness (meaningful range 0-19) for every
//! segment. Drawing is additive: overlapping draws sum. Callers clear the
//! buffer before composing a new frame.

use super::segment::{SegmentIndex, SEGMENT_COUNT};

/// Additive, signed, pre-lookup brightness per segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OffScreenBuffer {
    cells: [i8; SEGMENT_COUNT],
}

impl Default for OffScreenBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OffScreenBuffer {
    /// Create a cleared buffer
    pub const fn new() -> Self {
        Self {
            cells: [0; SEGMENT_COUNT],
        }
    }

    /// Add brightness to one segment
    ///
    /// No clamping: values outside 0-19 are kept as-is, and the signed
    /// storage wraps on overflow.
    #[inline]
    pub fn add(&mut self, index: SegmentIndex, level: i8) {
        self.add_linear(index.linear(), level);
    }

    #[inline]
    pub(crate) fn add_linear(&mut self, index: usize, level: i8) {
        let cell = &mut self.cells[index];
        *cell = cell.wrapping_add(level);
    }

    /// Read one segment
    #[inline]
    pub fn get(&self, index: SegmentIndex) -> i8 {
        self.cells[index.linear()]
    }

    /// Overwrite one segment
    #[inline]
    pub fn set(&mut self, index: SegmentIndex, level: i8) {
        self.cells[index.linear()] = level;
    }

    /// Reset every segment to zero
    pub fn clear(&mut self) {
        self.cells = [0; SEGMENT_COUNT];
    }

    /// All cells in buffer order
    pub fn as_slice(&self) -> &[i8; SEGMENT_COUNT] {
        &self.cells
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [i8; SEGMENT_COUNT] {
        &mut self.cells
    }
}
