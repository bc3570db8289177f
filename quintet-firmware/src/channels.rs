//! Shared state between the refresh tick and the animator
//!
//! The refresh tick runs on the high-priority interrupt executor and
//! preempts the animator at any point. Only the video buffer is written
//! by one side and read by the other; everything else crosses over as a
//! signal.

use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use quintet_core::buffer::VideoBuffer;
use quintet_core::scan::BrightnessMode;
use quintet_drivers::panel::PanelError;

/// Panel error as reported by the board's SPI and GPIO outputs
pub type PanelFault = PanelError<embassy_rp::spi::Error, Infallible>;

/// Duty levels shown by the refresh tick
///
/// Written by the animator through the compositor, read every tick.
pub static VIDEO: VideoBuffer = VideoBuffer::new();

/// Brightness mode change (animator → refresh)
pub static MODE_CHANGE: Signal<CriticalSectionRawMutex, BrightnessMode> = Signal::new();

/// First panel error seen since the last report (refresh → animator)
pub static PANEL_FAULT: Signal<CriticalSectionRawMutex, PanelFault> = Signal::new();
