//! Brightness lookup table
//!
//! Maps a logical brightness level (0-19) to a physical duty level (0-15).
//!
//! The curve samples `y = 15 * e^((x - 23) / 6.5)` and rounds, then is
//! hand-trimmed for a sharper cutoff at the dim end so that equal steps in
//! logical level look like equal steps in perceived brightness.

/// Highest logical brightness level
pub const MAX_LEVEL: u8 = 19;

/// Number of logical levels
pub const LEVELS: usize = MAX_LEVEL as usize + 1;

/// Highest physical duty level
pub const MAX_DUTY: u8 = 15;

/// Logical level to duty level
pub const BLUT: [u8; LEVELS] = [
    0, 1, 1, 1, 1, //
    2, 2, 2, 3, 3, //
    4, 4, 5, 6, 7, //
    8, 10, 11, 13, 15,
];

/// Convert a logical level to a duty level
///
/// Levels above 19 saturate.
#[inline]
pub const fn to_duty(level: u8) -> u8 {
    let level = if level > MAX_LEVEL { MAX_LEVEL } else { level };
    BLUT[level as usize]
}

/// Convert a signed off-screen value to a duty level
///
/// Negative values are dark; values above 19 saturate.
#[inline]
pub const fn osb_to_duty(value: i8) -> u8 {
    if value <= 0 {
        0
    } else {
        to_duty(value as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(to_duty(0), 0);
        assert_eq!(to_duty(MAX_LEVEL), MAX_DUTY);
        assert_eq!(to_duty(10), 4);
    }

    #[test]
    fn test_monotonic() {
        for pair in BLUT.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_saturation() {
        assert_eq!(to_duty(200), MAX_DUTY);
        assert_eq!(osb_to_duty(-5), 0);
        assert_eq!(osb_to_duty(15), 8);
        assert_eq!(osb_to_duty(i8::MAX), MAX_DUTY);
    }

    proptest! {
        #[test]
        fn prop_non_decreasing(a in 0u8..=MAX_LEVEL, b in 0u8..=MAX_LEVEL) {
            if a <= b {
                prop_assert!(to_duty(a) <= to_duty(b));
            }
        }

        #[test]
        fn prop_within_duty_range(level in any::<i8>()) {
            prop_assert!(osb_to_duty(level) <= MAX_DUTY);
        }
    }
}
