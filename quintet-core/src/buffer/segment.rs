//! Segment addressing
//!
//! The display is a flat array of 90 segments: five character positions of
//! eighteen segments each. Position 0 is the rightmost character.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of character positions
pub const POSITIONS: usize = 5;

/// Segments per character position
pub const SEGMENTS_PER_POSITION: usize = 18;

/// Total segment count across the display
pub const SEGMENT_COUNT: usize = POSITIONS * SEGMENTS_PER_POSITION;

/// Local index of the lower decimal point
pub const LOWER_DP: u8 = 6;

/// Local index of the upper decimal point
pub const UPPER_DP: u8 = 7;

/// Mask covering all 18 segment bits
const PATTERN_MASK: u32 = (1 << SEGMENTS_PER_POSITION) - 1;

/// A validated segment address
///
/// Wraps the linear index `position * 18 + segment` so that callers never
/// do the index arithmetic themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentIndex(u8);

impl SegmentIndex {
    /// Address a segment by character position and local segment
    ///
    /// Returns `None` if `position >= 5` or `segment >= 18`.
    pub const fn new(position: u8, segment: u8) -> Option<Self> {
        if (position as usize) < POSITIONS && (segment as usize) < SEGMENTS_PER_POSITION {
            Some(Self(position * SEGMENTS_PER_POSITION as u8 + segment))
        } else {
            None
        }
    }

    /// Address a segment by on-screen column (0 = leftmost character)
    ///
    /// Display strings are written left to right, so column `c` of a
    /// string lands in position `4 - c`.
    pub const fn at_column(column: u8, segment: u8) -> Option<Self> {
        if (column as usize) < POSITIONS {
            Self::new(POSITIONS as u8 - 1 - column, segment)
        } else {
            None
        }
    }

    /// Address a segment by its linear index (0-89)
    pub const fn from_linear(index: u8) -> Option<Self> {
        if (index as usize) < SEGMENT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Lower decimal point of a position
    pub const fn lower_dp(position: u8) -> Option<Self> {
        Self::new(position, LOWER_DP)
    }

    /// Upper decimal point of a position
    pub const fn upper_dp(position: u8) -> Option<Self> {
        Self::new(position, UPPER_DP)
    }

    /// Character position (0 = rightmost)
    pub const fn position(self) -> u8 {
        self.0 / SEGMENTS_PER_POSITION as u8
    }

    /// Segment within its character (0-17)
    pub const fn local(self) -> u8 {
        self.0 % SEGMENTS_PER_POSITION as u8
    }

    /// Linear index into a 90-entry buffer
    pub const fn linear(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all segments in buffer order
    pub fn all() -> impl Iterator<Item = SegmentIndex> {
        (0..SEGMENT_COUNT as u8).map(SegmentIndex)
    }
}

/// On/off state of the 18 segments of one character
///
/// Bit `n` corresponds to local segment `n`. The packed byte layout
/// matches the glyph table and the order the driver chain expects:
///
/// | byte | bits | segments |
/// |------|------|----------|
/// | 0    | 0-7  | 0-7 (6 and 7 are the decimal points) |
/// | 1    | 0-1  | 8-9      |
/// | 2    | 0-7  | 10-17    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentPattern(u32);

impl SegmentPattern {
    /// All segments off
    pub const EMPTY: Self = Self(0);

    /// All segments on
    pub const FULL: Self = Self(PATTERN_MASK);

    /// Build from raw bits; bits above 17 are discarded
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & PATTERN_MASK)
    }

    /// Raw 18-bit value
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Unpack from the three-byte layout
    ///
    /// Only bits 0-1 of the middle byte are meaningful.
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        let low = bytes[0] as u32;
        let mid = (bytes[1] & 0b11) as u32;
        let high = bytes[2] as u32;
        Self(low | (mid << 8) | (high << 10))
    }

    /// Pack into the three-byte layout
    pub const fn to_bytes(self) -> [u8; 3] {
        [
            (self.0 & 0xFF) as u8,
            ((self.0 >> 8) & 0b11) as u8,
            ((self.0 >> 10) & 0xFF) as u8,
        ]
    }

    /// Check whether a local segment is on
    pub const fn is_lit(self, segment: u8) -> bool {
        (segment as usize) < SEGMENTS_PER_POSITION && self.0 & (1 << segment) != 0
    }

    /// Turn a local segment on or off; out-of-range segments are ignored
    pub fn set(&mut self, segment: u8, lit: bool) {
        if (segment as usize) >= SEGMENTS_PER_POSITION {
            return;
        }
        if lit {
            self.0 |= 1 << segment;
        } else {
            self.0 &= !(1 << segment);
        }
    }

    /// Number of lit segments
    pub const fn count_lit(self) -> u32 {
        self.0.count_ones()
    }

    /// Expand into one flag per segment
    pub fn to_array(self) -> [bool; SEGMENTS_PER_POSITION] {
        core::array::from_fn(|s| self.0 & (1 << s) != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping() {
        let idx = SegmentIndex::new(2, 5).unwrap();
        assert_eq!(idx.linear(), 41);
        assert_eq!(idx.position(), 2);
        assert_eq!(idx.local(), 5);

        assert_eq!(SegmentIndex::from_linear(89).unwrap().position(), 4);
        assert_eq!(SegmentIndex::from_linear(89).unwrap().local(), 17);
    }

    #[test]
    fn test_column_is_mirrored() {
        assert_eq!(SegmentIndex::at_column(0, 0), SegmentIndex::new(4, 0));
        assert_eq!(SegmentIndex::at_column(4, 7), SegmentIndex::new(0, 7));
        assert!(SegmentIndex::at_column(5, 0).is_none());
    }

    #[test]
    fn test_index_bounds() {
        assert!(SegmentIndex::new(5, 0).is_none());
        assert!(SegmentIndex::new(0, 18).is_none());
        assert!(SegmentIndex::from_linear(90).is_none());
        assert_eq!(SegmentIndex::all().count(), SEGMENT_COUNT);
    }

    #[test]
    fn test_decimal_points() {
        assert_eq!(SegmentIndex::lower_dp(1).unwrap().linear(), 24);
        assert_eq!(SegmentIndex::upper_dp(1).unwrap().linear(), 25);
    }

    #[test]
    fn test_pattern_bytes() {
        // Middle byte only carries two segments
        let pattern = SegmentPattern::from_bytes([0x81, 0xFF, 0x01]);
        assert!(pattern.is_lit(0));
        assert!(pattern.is_lit(7));
        assert!(pattern.is_lit(8));
        assert!(pattern.is_lit(9));
        assert!(pattern.is_lit(10));
        assert!(!pattern.is_lit(11));
        assert_eq!(pattern.to_bytes(), [0x81, 0x03, 0x01]);
        assert_eq!(pattern.count_lit(), 5);
    }

    #[test]
    fn test_pattern_set() {
        let mut pattern = SegmentPattern::EMPTY;
        pattern.set(17, true);
        pattern.set(18, true);
        assert_eq!(pattern.bits(), 1 << 17);
        assert_eq!(pattern.to_bytes(), [0, 0, 0x80]);
        pattern.set(17, false);
        assert_eq!(pattern, SegmentPattern::EMPTY);
        assert_eq!(SegmentPattern::FULL.count_lit(), 18);
    }
}
