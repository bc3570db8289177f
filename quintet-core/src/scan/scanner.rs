//! Duty-threshold scan state
//!
//! A 1-based step counter runs from 1 to the mode ceiling while one
//! position is shown. On each step a segment is on when its duty value
//! is at least the step, so a duty of `d` stays lit for `d` of the
//! `ceiling` steps. Past the ceiling the counter restarts at 1 and the
//! scan moves to the next position, wrapping after the last.

use crate::buffer::{SegmentPattern, VideoBuffer, POSITIONS};

use super::mode::ScanConfig;

/// One tick's worth of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanSlice {
    /// Position whose row is enabled
    pub position: u8,
    /// Segments to switch on
    pub pattern: SegmentPattern,
}

/// Scan counters
#[derive(Debug, Clone)]
pub struct Scanner {
    step: u8,
    position: u8,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Start at step 1 of position 0
    pub const fn new() -> Self {
        Self {
            step: 1,
            position: 0,
        }
    }

    /// Current threshold step
    pub fn step(&self) -> u8 {
        self.step
    }

    /// Position shown on the next slice
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Threshold the current position's duty values and advance
    pub fn next_slice(&mut self, video: &VideoBuffer, config: ScanConfig) -> ScanSlice {
        let duties = video.position(self.position);
        let mut pattern = SegmentPattern::EMPTY;
        for (segment, &duty) in duties.iter().enumerate() {
            if duty >= self.step {
                pattern.set(segment as u8, true);
            }
        }

        let slice = ScanSlice {
            position: self.position,
            pattern,
        };
        self.advance(config.ceiling);
        slice
    }

    fn advance(&mut self, ceiling: u8) {
        self.step = self.step.saturating_add(1);
        if self.step > ceiling {
            self.step = 1;
            self.position = (self.position + 1) % POSITIONS as u8;
        }
    }
}
