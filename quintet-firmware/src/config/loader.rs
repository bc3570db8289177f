//! Embedded configuration loader
//!
//! Parses the display.toml text compiled into the firmware. build.rs has
//! already checked it, so a failure here means the two checks disagree;
//! the firmware logs it and carries on with defaults rather than leaving
//! the display dark.

use defmt::*;

use quintet_core::config::{parse_config, DisplayConfig};

/// Embedded default configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../display.toml");

/// Load the display configuration
pub fn load_config() -> DisplayConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {}", e);
            error!("Using default configuration");
            return DisplayConfig::default();
        }
    };

    if !config.is_valid() {
        warn!("Embedded configuration out of range, using defaults");
        return DisplayConfig::default();
    }

    info!(
        "Display: level={}, mode={}, numerals={}, refresh={}us ({} Hz frames)",
        config.brightness_level,
        config.brightness_mode,
        config.numeral_set,
        config.refresh_period_us,
        config.frame_rate_hz()
    );
    info!(
        "Animation: fade step={}ms ({}ms per fade), hold={}ms, greeting=\"{}\"",
        config.fade_step_ms,
        config.fade_duration_ms(),
        config.hold_ms,
        config.greeting.as_str()
    );

    config
}
