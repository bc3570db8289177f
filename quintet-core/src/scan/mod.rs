//! Multiplexed refresh
//!
//! Turns the duty values in the [`VideoBuffer`](crate::buffer::VideoBuffer)
//! into time-sliced on/off pulses, one position at a time.

pub mod mode;
pub mod multiplexer;
pub mod scanner;

pub use mode::{BrightnessMode, ScanConfig};
pub use multiplexer::Multiplexer;
pub use scanner::{ScanSlice, Scanner};
