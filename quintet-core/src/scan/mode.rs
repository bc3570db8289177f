//! Brightness modes
//!
//! Each mode is a small scan configuration: how many threshold steps one
//! position is shown for, and whether its row stays enabled between ticks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of the duty-threshold scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanConfig {
    /// Highest threshold step before moving to the next position
    pub ceiling: u8,
    /// Leave the row enabled until the next tick instead of blanking
    /// right after lighting it
    pub hold_row: bool,
}

/// Global intensity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BrightnessMode {
    /// Extra dim: short pulses spread over a long threshold range
    Low,
    /// Short pulses over the full duty range
    #[default]
    Medium,
    /// Rows held on for the whole tick
    High,
}

impl BrightnessMode {
    /// All modes, dimmest first
    pub const ALL: [BrightnessMode; 3] = [
        BrightnessMode::Low,
        BrightnessMode::Medium,
        BrightnessMode::High,
    ];

    /// Scan parameters for this mode
    pub const fn scan_config(self) -> ScanConfig {
        match self {
            BrightnessMode::Low => ScanConfig {
                ceiling: 57,
                hold_row: false,
            },
            BrightnessMode::Medium => ScanConfig {
                ceiling: 15,
                hold_row: false,
            },
            BrightnessMode::High => ScanConfig {
                ceiling: 15,
                hold_row: true,
            },
        }
    }

    /// Parse a mode name as used in configuration files
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "low" => Some(BrightnessMode::Low),
            "medium" => Some(BrightnessMode::Medium),
            "high" => Some(BrightnessMode::High),
            _ => None,
        }
    }

    /// Configuration file name of this mode
    pub fn name(self) -> &'static str {
        match self {
            BrightnessMode::Low => "low",
            BrightnessMode::Medium => "medium",
            BrightnessMode::High => "high",
        }
    }

    /// Next brighter mode, wrapping from high back to low
    pub fn cycle(self) -> Self {
        match self {
            BrightnessMode::Low => BrightnessMode::Medium,
            BrightnessMode::Medium => BrightnessMode::High,
            BrightnessMode::High => BrightnessMode::Low,
        }
    }
}
