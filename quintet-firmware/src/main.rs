//! Quintet - Grayscale Alphanumeric Display Firmware
//!
//! Main firmware binary for RP2040 boards driving a five-character,
//! 18-segment LED display with 16 grayscale levels.
//!
//! Two executors share the core:
//!
//! - an interrupt executor on `SWI_IRQ_1` (high priority) runs the
//!   refresh task, which stands in for the display timer interrupt
//! - the thread-mode executor runs the animator, which composes frames
//!   and steps fades
//!
//! The refresh task preempts the animator whenever its ticker fires.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::spi::{self, Spi};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use quintet_drivers::panel::ShiftRegisterPanel;

mod channels;
mod config;
mod tasks;

/// Shift register clock; three bytes take 3 µs at this rate
const SPI_FREQUENCY_HZ: u32 = 8_000_000;

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[entry]
fn main() -> ! {
    info!("Quintet firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    // Segment driver chain on SPI0 (SCK=GPIO18, MOSI=GPIO19)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);

    // Control lines: latch idles low, blank and the active-low rows
    // start high so nothing lights before the first tick
    let latch = Output::new(p.PIN_20, Level::Low);
    let blank = Output::new(p.PIN_21, Level::High);
    let rows = [
        Output::new(p.PIN_10, Level::High),
        Output::new(p.PIN_11, Level::High),
        Output::new(p.PIN_12, Level::High),
        Output::new(p.PIN_13, Level::High),
        Output::new(p.PIN_14, Level::High),
    ];

    let panel = unwrap!(ShiftRegisterPanel::new(spi, latch, blank, rows));
    info!("Panel initialized");

    // High-priority executor for the refresh tick
    interrupt::SWI_IRQ_1.set_priority(Priority::P1);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    unwrap!(spawner.spawn(tasks::refresh_task(
        panel,
        config.brightness_mode,
        config.refresh_period_us,
    )));
    info!(
        "Refresh running every {}us in {} mode",
        config.refresh_period_us, config.brightness_mode
    );

    // Everything else runs in thread mode
    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        unwrap!(spawner.spawn(tasks::animator_task(config)));
        info!("All tasks spawned, firmware running");
    })
}
