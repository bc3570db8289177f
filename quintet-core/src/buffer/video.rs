//! Video buffer shared with the refresh interrupt
//!
//! The video buffer holds the final, physical duty level (0-15) of every
//! segment. It is the only state the refresh tick reads.
//!
//! # Sharing contract
//!
//! One producer (the compositor, running in thread mode) writes, one
//! consumer (the refresh tick, running at interrupt priority) reads. Each
//! cell is an independent atomic byte accessed with `Relaxed` ordering, so
//! neither side ever waits on the other. A tick that lands in the middle of
//! a buffer update shows a mix of old and new segments for a fraction of
//! one frame; control state is never corrupted.

use portable_atomic::{AtomicU8, Ordering};

use super::segment::{SegmentIndex, POSITIONS, SEGMENTS_PER_POSITION, SEGMENT_COUNT};

/// Per-segment duty levels, post brightness lookup
pub struct VideoBuffer {
    cells: [AtomicU8; SEGMENT_COUNT],
}

impl Default for VideoBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoBuffer {
    /// Create a cleared buffer
    ///
    /// `const` so the buffer can live in a `static` shared with the
    /// refresh interrupt.
    pub const fn new() -> Self {
        #[allow(clippy::declare_interior_mutable_const)]
        const DARK: AtomicU8 = AtomicU8::new(0);
        Self {
            cells: [DARK; SEGMENT_COUNT],
        }
    }

    /// Read one segment's duty level
    #[inline]
    pub fn load(&self, index: SegmentIndex) -> u8 {
        self.cells[index.linear()].load(Ordering::Relaxed)
    }

    /// Write one segment's duty level
    #[inline]
    pub fn store(&self, index: SegmentIndex, duty: u8) {
        self.cells[index.linear()].store(duty, Ordering::Relaxed);
    }

    /// Write by raw linear index; used by the bulk loaders
    #[inline]
    pub(crate) fn store_linear(&self, index: usize, duty: u8) {
        self.cells[index].store(duty, Ordering::Relaxed);
    }

    /// Set every segment dark
    pub fn clear(&self) {
        for cell in &self.cells {
            cell.store(0, Ordering::Relaxed);
        }
    }

    /// Read the 18 duty levels of one character position
    ///
    /// Out-of-range positions read as dark.
    #[inline]
    pub fn position(&self, position: u8) -> [u8; SEGMENTS_PER_POSITION] {
        let position = position as usize;
        if position >= POSITIONS {
            return [0; SEGMENTS_PER_POSITION];
        }
        let base = position * SEGMENTS_PER_POSITION;
        core::array::from_fn(|s| self.cells[base + s].load(Ordering::Relaxed))
    }

    /// Copy the whole buffer
    pub fn snapshot(&self) -> [u8; SEGMENT_COUNT] {
        core::array::from_fn(|i| self.cells[i].load(Ordering::Relaxed))
    }
}
