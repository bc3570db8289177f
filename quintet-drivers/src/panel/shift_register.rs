//! Shift-register segment panel
//!
//! The segment lines are driven by a chain of serial-in, parallel-out
//! driver chips. Segment data is clocked in over SPI and copied to the
//! outputs by a pulse on the latch line. A separate blanking line forces
//! every segment output off while it is high. Each character position
//! has a row driver that conducts while its enable line is low.
//!
//! # Wiring
//!
//! ```text
//!   SPI MOSI/SCK ──▶ [driver chain, 24 bits] ──▶ 18 segment lines
//!   LATCH  ─┘            │
//!   BLANK  ──────────────┘ (high = outputs off)
//!   ROW0..ROW4 ──▶ row drivers (low = row on)
//! ```
//!
//! Bytes go out in segment order: segments 0-7, segments 8-9 (low two
//! bits), segments 10-17.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use quintet_core::buffer::{SegmentPattern, POSITIONS};
use quintet_core::traits::DisplayPanel;

/// Number of row enable lines
pub const ROW_COUNT: usize = POSITIONS;

/// Errors that can occur while driving the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<S, P> {
    /// SPI transfer to the driver chain failed
    Spi(S),
    /// Latch, blank, or row enable pin could not be driven
    Pin(P),
}

/// Panel driven through a shift-register chain and row enables
///
/// All control lines share one pin type, which is how HAL crates such as
/// `embassy-rp` hand out degraded outputs.
pub struct ShiftRegisterPanel<SPI, PIN> {
    spi: SPI,
    latch: PIN,
    blank: PIN,
    rows: [PIN; ROW_COUNT],
    /// Row currently enabled, if any
    active_row: Option<u8>,
}

impl<SPI, PIN> ShiftRegisterPanel<SPI, PIN>
where
    SPI: SpiBus<u8>,
    PIN: OutputPin,
{
    /// Create a new panel driver
    ///
    /// Leaves the panel fully blanked: outputs off, every row disabled,
    /// latch idle low.
    pub fn new(
        spi: SPI,
        latch: PIN,
        blank: PIN,
        rows: [PIN; ROW_COUNT],
    ) -> Result<Self, PanelError<SPI::Error, PIN::Error>> {
        let mut panel = Self {
            spi,
            latch,
            blank,
            rows,
            active_row: None,
        };

        panel.latch.set_low().map_err(PanelError::Pin)?;
        panel.blank.set_high().map_err(PanelError::Pin)?;
        for row in panel.rows.iter_mut() {
            row.set_high().map_err(PanelError::Pin)?;
        }

        Ok(panel)
    }

    /// Row currently enabled, if any
    pub fn active_row(&self) -> Option<u8> {
        self.active_row
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, PIN, PIN, [PIN; ROW_COUNT]) {
        (self.spi, self.latch, self.blank, self.rows)
    }
}

impl<SPI, PIN> DisplayPanel for ShiftRegisterPanel<SPI, PIN>
where
    SPI: SpiBus<u8>,
    PIN: OutputPin,
{
    type Error = PanelError<SPI::Error, PIN::Error>;

    fn blank(&mut self) -> Result<(), Self::Error> {
        self.blank.set_high().map_err(PanelError::Pin)?;

        // Only the active row can be on
        if let Some(row) = self.active_row.take() {
            if let Some(pin) = self.rows.get_mut(row as usize) {
                pin.set_high().map_err(PanelError::Pin)?;
            }
        }

        Ok(())
    }

    fn load(&mut self, pattern: SegmentPattern) -> Result<(), Self::Error> {
        self.spi
            .write(&pattern.to_bytes())
            .map_err(PanelError::Spi)?;
        // Latch must not pulse before the last bit is out
        self.spi.flush().map_err(PanelError::Spi)?;

        self.latch.set_high().map_err(PanelError::Pin)?;
        self.latch.set_low().map_err(PanelError::Pin)?;

        Ok(())
    }

    fn light(&mut self, position: u8) -> Result<(), Self::Error> {
        let Some(pin) = self.rows.get_mut(position as usize) else {
            return Ok(());
        };

        pin.set_low().map_err(PanelError::Pin)?;
        self.active_row = Some(position);
        self.blank.set_low().map_err(PanelError::Pin)?;

        Ok(())
    }
}
