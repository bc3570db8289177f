//! Linear cross-fade between two compositions
//!
//! A fade captures the frame currently on screen (`from`) and the frame
//! to show next (`to`). Each step moves every segment one logical level
//! further from `from` toward `to`, never past it. Segments with a small
//! gap arrive early; the fade as a whole lasts as many steps as the
//! global brightness level.
//!
//! # State machine
//!
//! ```text
//!            begin                    step (stage < level)
//!   Idle ───────────▶ Fading{0} ───────────────────────▶ Fading{n+1}
//!    ▲                   │                                   │
//!    └───────────────────┴──── step (stage reaches level) ───┘
//!                              osb := to
//! ```
//!
//! Starting a new fade discards whatever remained of the previous one.

use crate::buffer::OffScreenBuffer;

/// Fade progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeState {
    /// No fade in progress
    #[default]
    Idle,
    /// Fade in progress; `stage` counts completed steps
    Fading { stage: u8 },
}

impl FadeState {
    /// Stage as a signed counter, `-1` when idle
    pub fn stage(self) -> i8 {
        match self {
            FadeState::Idle => -1,
            FadeState::Fading { stage } => stage.min(i8::MAX as u8) as i8,
        }
    }
}

/// Value of one segment after `stage` steps of a fade
///
/// Moves one level per step from `from` toward `to` and stops at `to`.
#[inline]
pub fn ramp(from: i8, to: i8, stage: u8) -> i8 {
    let stage = stage as i16;
    let (from16, to16) = (from as i16, to as i16);
    let value = if to16 > from16 {
        (from16 + stage).min(to16)
    } else if to16 < from16 {
        (from16 - stage).max(to16)
    } else {
        to16
    };
    value as i8
}

/// Fade engine working state
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeEngine {
    from: OffScreenBuffer,
    to: OffScreenBuffer,
    state: FadeState,
}

impl Default for FadeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeEngine {
    /// Create an idle engine
    pub const fn new() -> Self {
        Self {
            from: OffScreenBuffer::new(),
            to: OffScreenBuffer::new(),
            state: FadeState::Idle,
        }
    }

    /// Start fading from `shown` to `target`
    ///
    /// `shown` must be the composition currently on screen, otherwise the
    /// fade departs from stale data.
    pub fn begin(&mut self, shown: &OffScreenBuffer, target: &OffScreenBuffer) {
        self.from = *shown;
        self.to = *target;
        self.state = FadeState::Fading { stage: 0 };
    }

    /// Advance one step, writing the intermediate frame into `osb`
    ///
    /// `level` is the global brightness level, which is also the fade
    /// length in steps. Once the stage reaches it `osb` is set exactly to
    /// the target and the engine returns to idle. Does nothing when idle.
    pub fn step(&mut self, osb: &mut OffScreenBuffer, level: u8) -> FadeState {
        let FadeState::Fading { stage } = self.state else {
            return self.state;
        };

        let stage = stage.saturating_add(1);

        if stage >= level {
            *osb = self.to;
            self.state = FadeState::Idle;
        } else {
            let from = self.from.as_slice();
            let to = self.to.as_slice();
            for (i, cell) in osb.as_mut_slice().iter_mut().enumerate() {
                *cell = ramp(from[i], to[i], stage);
            }
            self.state = FadeState::Fading { stage };
        }

        self.state
    }

    /// Current state
    pub fn state(&self) -> FadeState {
        self.state
    }

    /// Stage counter, `-1` when idle
    pub fn stage(&self) -> i8 {
        self.state.stage()
    }

    /// Check if a fade is in progress
    pub fn is_fading(&self) -> bool {
        matches!(self.state, FadeState::Fading { .. })
    }

    /// Snapshot the fade departs from
    pub fn fade_from(&self) -> &OffScreenBuffer {
        &self.from
    }

    /// Snapshot the fade arrives at
    pub fn fade_to(&self) -> &OffScreenBuffer {
        &self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{SegmentIndex, SEGMENT_COUNT};
    use proptest::prelude::*;

    fn buffer_from(values: &[i8]) -> OffScreenBuffer {
        let mut osb = OffScreenBuffer::new();
        for (idx, &v) in SegmentIndex::all().zip(values.iter().cycle()) {
            osb.set(idx, v);
        }
        osb
    }

    #[test]
    fn test_ramp() {
        assert_eq!(ramp(0, 10, 3), 3);
        assert_eq!(ramp(0, 2, 3), 2);
        assert_eq!(ramp(10, 0, 4), 6);
        assert_eq!(ramp(10, 8, 4), 8);
        assert_eq!(ramp(5, 5, 7), 5);
    }

    #[test]
    fn test_idle_step_is_noop() {
        let mut engine = FadeEngine::new();
        let mut osb = buffer_from(&[3, 7]);
        let before = osb;
        assert_eq!(engine.step(&mut osb, 10), FadeState::Idle);
        assert_eq!(osb, before);
        assert_eq!(engine.stage(), -1);
    }

    #[test]
    fn test_brighten_sequence() {
        let mut engine = FadeEngine::new();
        let from = buffer_from(&[0]);
        let to = buffer_from(&[4]);
        let mut osb = to;
        engine.begin(&from, &to);
        assert_eq!(engine.stage(), 0);

        let idx = SegmentIndex::from_linear(0).unwrap();
        let mut seen = heapless::Vec::<i8, 8>::new();
        for _ in 0..6 {
            engine.step(&mut osb, 6);
            seen.push(osb.get(idx)).unwrap();
        }
        assert_eq!(seen.as_slice(), &[1, 2, 3, 4, 4, 4]);
        assert!(!engine.is_fading());
    }

    #[test]
    fn test_dim_sequence() {
        let mut engine = FadeEngine::new();
        let from = buffer_from(&[15]);
        let to = buffer_from(&[0]);
        let mut osb = to;
        engine.begin(&from, &to);

        engine.step(&mut osb, 5);
        assert_eq!(osb.as_slice()[0], 14);
        engine.step(&mut osb, 5);
        assert_eq!(osb.as_slice()[0], 13);
        assert_eq!(engine.stage(), 2);

        // Remaining steps snap to the target at the end
        engine.step(&mut osb, 5);
        engine.step(&mut osb, 5);
        assert!(engine.is_fading());
        engine.step(&mut osb, 5);
        assert_eq!(osb, to);
        assert_eq!(engine.state(), FadeState::Idle);
    }

    #[test]
    fn test_level_zero_completes_immediately() {
        let mut engine = FadeEngine::new();
        let from = buffer_from(&[9]);
        let to = buffer_from(&[2]);
        let mut osb = from;
        engine.begin(&from, &to);
        assert_eq!(engine.step(&mut osb, 0), FadeState::Idle);
        assert_eq!(osb, to);
    }

    #[test]
    fn test_restart_discards_previous() {
        let mut engine = FadeEngine::new();
        let a = buffer_from(&[0]);
        let b = buffer_from(&[10]);
        let c = buffer_from(&[3]);
        let mut osb = b;
        engine.begin(&a, &b);
        engine.step(&mut osb, 19);
        engine.step(&mut osb, 19);

        engine.begin(&osb, &c);
        assert_eq!(engine.stage(), 0);
        assert_eq!(engine.fade_to(), &c);
        assert_eq!(engine.fade_from().as_slice()[0], 2);
    }

    proptest! {
        #[test]
        fn prop_completes_after_level_steps(
            from in proptest::collection::vec(0i8..=19, SEGMENT_COUNT),
            to in proptest::collection::vec(0i8..=19, SEGMENT_COUNT),
            level in 1u8..=19,
        ) {
            let from = buffer_from(&from);
            let to = buffer_from(&to);
            let mut osb = to;
            let mut engine = FadeEngine::new();
            engine.begin(&from, &to);

            for _ in 0..level {
                engine.step(&mut osb, level);
            }
            prop_assert_eq!(osb, to);
            prop_assert_eq!(engine.stage(), -1);

            engine.step(&mut osb, level);
            prop_assert_eq!(osb, to);
        }

        #[test]
        fn prop_monotonic_approach(
            from in proptest::collection::vec(0i8..=19, SEGMENT_COUNT),
            to in proptest::collection::vec(0i8..=19, SEGMENT_COUNT),
            level in 1u8..=19,
        ) {
            let from_buf = buffer_from(&from);
            let to_buf = buffer_from(&to);
            let mut osb = to_buf;
            let mut engine = FadeEngine::new();
            engine.begin(&from_buf, &to_buf);

            let mut previous = *from_buf.as_slice();
            while engine.is_fading() {
                engine.step(&mut osb, level);
                for (i, &value) in osb.as_slice().iter().enumerate() {
                    let (start, target) = (from[i], to[i]);
                    let (lo, hi) = if start <= target { (start, target) } else { (target, start) };
                    prop_assert!(value >= lo && value <= hi);
                    // Each step moves toward the target, never away
                    prop_assert!((target - value).abs() <= (target - previous[i]).abs());
                }
                previous = *osb.as_slice();
            }
            prop_assert_eq!(&previous[..], &to[..]);
        }
    }
}
