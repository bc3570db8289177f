//! Configuration text parser
//!
//! A minimal TOML subset, enough for the display configuration. It does
//! NOT support the full TOML grammar.
//!
//! Supported features:
//! - `[display]` and `[animation]` section headers
//! - Key = value pairs (string, integer)
//! - Comments (# ...), including trailing comments
//!
//! Keys before the first section header, unknown sections, and unknown
//! keys are rejected so that typos do not silently fall back to defaults.

use heapless::String;

use crate::glyph::NumeralSet;
use crate::render::MAX_LEVEL;
use crate::scan::BrightnessMode;

use super::types::{DisplayConfig, MAX_REFRESH_PERIOD_US, MIN_REFRESH_PERIOD_US};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header, or a key outside any section
    InvalidSection,
    /// Key not recognised in its section
    UnknownKey,
    /// Value has the wrong type or shape
    InvalidValue,
    /// Value parsed but lies outside its allowed range
    OutOfRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Animation,
}

/// Parse configuration text into a [`DisplayConfig`]
///
/// Keys that are absent keep their default values.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ConfigError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse a header line like "[display]"
fn parse_section_header(line: &str) -> Result<Section, ConfigError> {
    let header = line
        .strip_prefix('[')
        .and_then(|rest| rest.split('#').next())
        .map(str::trim)
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ConfigError::InvalidSection)?;

    match header.trim() {
        "display" => Ok(Section::Display),
        "animation" => Ok(Section::Animation),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = match value.find('#') {
        // Make sure # is not inside a string
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DisplayConfig,
) -> Result<(), ConfigError> {
    match section {
        Section::Root => Err(ConfigError::InvalidSection),
        Section::Display => match key {
            "brightness_level" => {
                config.brightness_level = parse_ranged(value, 0, MAX_LEVEL)?;
                Ok(())
            }
            "brightness_mode" => {
                config.brightness_mode = BrightnessMode::from_name(parse_string(value)?)
                    .ok_or(ConfigError::InvalidValue)?;
                Ok(())
            }
            "numeral_set" => {
                let index: u8 = parse_int(value)?;
                config.numeral_set =
                    NumeralSet::from_index(index).ok_or(ConfigError::OutOfRange)?;
                Ok(())
            }
            "refresh_period_us" => {
                config.refresh_period_us =
                    parse_ranged(value, MIN_REFRESH_PERIOD_US, MAX_REFRESH_PERIOD_US)?;
                Ok(())
            }
            _ => Err(ConfigError::UnknownKey),
        },
        Section::Animation => match key {
            "fade_step_ms" => {
                config.fade_step_ms = parse_ranged(value, 1, 1000)?;
                Ok(())
            }
            "hold_ms" => {
                config.hold_ms = parse_int(value)?;
                Ok(())
            }
            "greeting" => {
                let text = parse_string(value)?;
                if !text.is_ascii() {
                    return Err(ConfigError::InvalidValue);
                }
                config.greeting = String::try_from(text).map_err(|_| ConfigError::OutOfRange)?;
                Ok(())
            }
            _ => Err(ConfigError::UnknownKey),
        },
    }
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ConfigError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else if value.contains('"') {
        Err(ConfigError::InvalidValue)
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue)
}

/// Parse an integer value and check it against an inclusive range
fn parse_ranged<T>(value: &str, min: T, max: T) -> Result<T, ConfigError>
where
    T: core::str::FromStr + PartialOrd,
{
    let parsed: T = parse_int(value)?;
    if parsed < min || parsed > max {
        return Err(ConfigError::OutOfRange);
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Quintet display settings

[display]
brightness_level = 12
brightness_mode = "high"   # rows held on
numeral_set = 1
refresh_period_us = 40

[animation]
fade_step_ms = 25
hold_ms = 1500
greeting = "HI #1"
"#;

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.brightness_level, 12);
        assert_eq!(config.brightness_mode, BrightnessMode::High);
        assert_eq!(config.numeral_set, NumeralSet::SlashedZero);
        assert_eq!(config.refresh_period_us, 40);
        assert_eq!(config.fade_step_ms, 25);
        assert_eq!(config.hold_ms, 1500);
        assert_eq!(config.greeting.as_str(), "HI #1");
    }

    #[test]
    fn test_empty_is_default() {
        assert_eq!(parse_config("").unwrap(), DisplayConfig::default());
        assert_eq!(
            parse_config("# nothing here\n\n[display]\n").unwrap(),
            DisplayConfig::default()
        );
    }

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("[display]"), Ok(Section::Display));
        assert_eq!(parse_section_header("[ animation ]"), Ok(Section::Animation));
        assert_eq!(
            parse_section_header("[animation] # timing"),
            Ok(Section::Animation)
        );
        assert_eq!(
            parse_section_header("[stepper.spin]"),
            Err(ConfigError::InvalidSection)
        );
        assert_eq!(parse_section_header("[display"), Err(ConfigError::InvalidSection));
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(parse_key_value("a = 1 # c"), Some(("a", "1")));
        assert_eq!(parse_key_value("g = \"A#B\""), Some(("g", "\"A#B\"")));
        assert_eq!(parse_key_value("a ="), None);
        assert_eq!(parse_key_value("no equals"), None);
    }

    #[test]
    fn test_key_outside_section() {
        assert_eq!(
            parse_config("brightness_level = 3"),
            Err(ConfigError::InvalidSection)
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_config("[display]\nbrightnes_level = 3"),
            Err(ConfigError::UnknownKey)
        );
        // Keys are scoped to their section
        assert_eq!(
            parse_config("[animation]\nbrightness_level = 3"),
            Err(ConfigError::UnknownKey)
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            parse_config("[display]\nbrightness_level = 20"),
            Err(ConfigError::OutOfRange)
        );
        assert_eq!(
            parse_config("[display]\nnumeral_set = 10"),
            Err(ConfigError::OutOfRange)
        );
        assert_eq!(
            parse_config("[display]\nrefresh_period_us = 8"),
            Err(ConfigError::OutOfRange)
        );
        assert_eq!(
            parse_config("[animation]\ngreeting = \"TOO LONG\""),
            Err(ConfigError::OutOfRange)
        );
    }

    #[test]
    fn test_invalid_value() {
        assert_eq!(
            parse_config("[display]\nbrightness_mode = \"blinding\""),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nbrightness_level = bright"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nbrightness_level = -1"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[animation]\ngreeting = \"HI"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\njust some words"),
            Err(ConfigError::InvalidValue)
        );
    }

    #[test]
    fn test_unquoted_mode() {
        let config = parse_config("[display]\nbrightness_mode = low").unwrap();
        assert_eq!(config.brightness_mode, BrightnessMode::Low);
    }
}
