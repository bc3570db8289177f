//! Refresh task
//!
//! Runs on the high-priority interrupt executor and plays the role of
//! the display timer interrupt: every period it renders one scan slice
//! of the video buffer onto the panel. It never logs; panel errors are
//! handed to the animator, which logs them from thread mode.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{Duration, Ticker};

use quintet_core::scan::{BrightnessMode, Multiplexer};
use quintet_drivers::panel::ShiftRegisterPanel;

use crate::channels::{MODE_CHANGE, PANEL_FAULT, VIDEO};

/// Panel as wired on the board
pub type Panel = ShiftRegisterPanel<Spi<'static, SPI0, Blocking>, Output<'static>>;

/// Refresh task - one multiplexer tick per period
#[embassy_executor::task]
pub async fn refresh_task(mut panel: Panel, mode: BrightnessMode, period_us: u32) {
    let mut mux = Multiplexer::new(mode);
    let mut ticker = Ticker::every(Duration::from_micros(period_us as u64));
    let mut reported = false;

    loop {
        if let Some(mode) = MODE_CHANGE.try_take() {
            mux.set_mode(mode);
        }

        match mux.tick(&VIDEO, &mut panel) {
            Ok(_) => reported = false,
            Err(e) => {
                // One report per run of failures
                if !reported {
                    PANEL_FAULT.signal(e);
                    reported = true;
                }
            }
        }

        ticker.next().await;
    }
}
