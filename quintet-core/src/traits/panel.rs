//! Display panel trait
//!
//! This trait abstracts over the hardware that drives the LED matrix:
//! a segment shift register with a latch and a blanking line, plus one
//! row enable per character position.

use crate::buffer::SegmentPattern;

/// Trait for multiplexed segment panels
///
/// The refresh tick calls these in a fixed order: `blank`, `load`,
/// `light`, then `blank` again unless the row is held on. Every call
/// runs in interrupt context and must not wait on anything slower than
/// a three byte transfer.
pub trait DisplayPanel {
    /// Bus or pin error reported by the implementation
    type Error;

    /// Disable the segment outputs and every row enable
    fn blank(&mut self) -> Result<(), Self::Error>;

    /// Shift in and latch the segment pattern for the next row
    ///
    /// Outputs stay blanked; nothing is visible until `light`.
    fn load(&mut self, pattern: SegmentPattern) -> Result<(), Self::Error>;

    /// Enable the row for `position` and unblank the segment outputs
    ///
    /// Positions outside the panel are ignored.
    fn light(&mut self, position: u8) -> Result<(), Self::Error>;
}
