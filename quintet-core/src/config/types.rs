//! Configuration type definitions
//!
//! These types describe how the display is driven and animated. They are
//! filled in by [`parse_config`](super::parse_config) from a small TOML
//! document embedded in the firmware.

use heapless::String;

use crate::glyph::NumeralSet;
use crate::render::{MAX_LEVEL, WORD_LEN};
use crate::scan::BrightnessMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum greeting length (one character per position)
pub const MAX_GREETING_LEN: usize = WORD_LEN;

/// Shortest refresh period the panel can keep up with (µs)
pub const MIN_REFRESH_PERIOD_US: u32 = 16;

/// Longest refresh period before the scan visibly flickers (µs)
pub const MAX_REFRESH_PERIOD_US: u32 = 200;

/// Display and animation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Global logical brightness (0-19), also the fade length in steps
    pub brightness_level: u8,
    /// Scan intensity mode
    pub brightness_mode: BrightnessMode,
    /// Digit shapes loaded at start-up
    pub numeral_set: NumeralSet,
    /// Refresh tick period in microseconds
    pub refresh_period_us: u32,
    /// Delay between fade steps in milliseconds
    pub fade_step_ms: u32,
    /// How long each word stays on screen between fades (ms)
    pub hold_ms: u32,
    /// Word faded in at boot
    pub greeting: String<MAX_GREETING_LEN>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            brightness_level: 15,
            brightness_mode: BrightnessMode::Medium,
            numeral_set: NumeralSet::Standard,
            refresh_period_us: 32,
            fade_step_ms: 40,
            hold_ms: 2000,
            greeting: String::try_from("HELLO").unwrap_or_default(),
        }
    }
}

impl DisplayConfig {
    /// Duration of one complete fade at the configured level (ms)
    pub fn fade_duration_ms(&self) -> u32 {
        self.fade_step_ms.saturating_mul(self.brightness_level as u32)
    }

    /// Full frame refresh rate in Hz for the configured mode and period
    pub fn frame_rate_hz(&self) -> u32 {
        let ceiling = self.brightness_mode.scan_config().ceiling as u32;
        let frame_us = self
            .refresh_period_us
            .saturating_mul(ceiling)
            .saturating_mul(crate::buffer::POSITIONS as u32);
        if frame_us == 0 {
            return 0;
        }
        1_000_000 / frame_us
    }

    /// Check value ranges that the parser cannot express per key
    pub fn is_valid(&self) -> bool {
        self.brightness_level <= MAX_LEVEL
            && (MIN_REFRESH_PERIOD_US..=MAX_REFRESH_PERIOD_US).contains(&self.refresh_period_us)
            && self.fade_step_ms > 0
    }
}
