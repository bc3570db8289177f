//! Refresh multiplexer
//!
//! One call to [`Multiplexer::tick`] is one refresh interrupt. The panel
//! is blanked before the row changes and again straight after lighting
//! it, so a position's pattern never shows on its neighbour's row. In
//! [`BrightnessMode::High`] the second blank is skipped and the row stays
//! on until the next tick, which is where the extra brightness comes from.

use crate::buffer::{VideoBuffer, POSITIONS};
use crate::traits::DisplayPanel;

use super::mode::{BrightnessMode, ScanConfig};
use super::scanner::{ScanSlice, Scanner};

/// Refresh state owned by the periodic tick
#[derive(Debug, Clone)]
pub struct Multiplexer {
    scanner: Scanner,
    mode: BrightnessMode,
    config: ScanConfig,
}

impl Default for Multiplexer {
    fn default() -> Self {
        Self::new(BrightnessMode::default())
    }
}

impl Multiplexer {
    /// Create a multiplexer starting at the first position
    pub const fn new(mode: BrightnessMode) -> Self {
        Self {
            scanner: Scanner::new(),
            mode,
            config: mode.scan_config(),
        }
    }

    /// Current brightness mode
    pub fn mode(&self) -> BrightnessMode {
        self.mode
    }

    /// Change the brightness mode, effective from the next tick
    pub fn set_mode(&mut self, mode: BrightnessMode) {
        self.mode = mode;
        self.config = mode.scan_config();
    }

    /// Ticks needed to show every position once
    pub fn frame_ticks(&self) -> u32 {
        POSITIONS as u32 * self.config.ceiling as u32
    }

    /// Scan counters
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Render one slice of the video buffer onto the panel
    ///
    /// The scan advances even if the panel reports an error, so a failing
    /// transfer costs one slice and never stalls the refresh.
    pub fn tick<P: DisplayPanel>(
        &mut self,
        video: &VideoBuffer,
        panel: &mut P,
    ) -> Result<ScanSlice, P::Error> {
        let slice = self.scanner.next_slice(video, self.config);

        panel.blank()?;
        panel.load(slice.pattern)?;
        panel.light(slice.position)?;
        if !self.config.hold_row {
            panel.blank()?;
        }

        Ok(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{SegmentIndex, SegmentPattern};
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Blank,
        Load(u32),
        Light(u8),
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockFault;

    /// Mock panel recording every call
    struct MockPanel {
        events: Vec<Event, 64>,
        fail_load: bool,
    }

    impl MockPanel {
        fn new() -> Self {
            Self {
                events: Vec::new(),
                fail_load: false,
            }
        }
    }

    impl DisplayPanel for MockPanel {
        type Error = MockFault;

        fn blank(&mut self) -> Result<(), MockFault> {
            self.events.push(Event::Blank).map_err(|_| MockFault)
        }

        fn load(&mut self, pattern: SegmentPattern) -> Result<(), MockFault> {
            if self.fail_load {
                return Err(MockFault);
            }
            self.events
                .push(Event::Load(pattern.bits()))
                .map_err(|_| MockFault)
        }

        fn light(&mut self, position: u8) -> Result<(), MockFault> {
            self.events
                .push(Event::Light(position))
                .map_err(|_| MockFault)
        }
    }

    #[test]
    fn test_tick_sequence() {
        let video = VideoBuffer::new();
        video.store(SegmentIndex::new(0, 3).unwrap(), 9);

        let mut mux = Multiplexer::new(BrightnessMode::Medium);
        let mut panel = MockPanel::new();
        mux.tick(&video, &mut panel).unwrap();

        assert_eq!(
            panel.events.as_slice(),
            &[Event::Blank, Event::Load(1 << 3), Event::Light(0), Event::Blank]
        );
    }

    #[test]
    fn test_high_mode_holds_row() {
        let video = VideoBuffer::new();
        let mut mux = Multiplexer::new(BrightnessMode::High);
        let mut panel = MockPanel::new();
        mux.tick(&video, &mut panel).unwrap();

        assert_eq!(
            panel.events.as_slice(),
            &[Event::Blank, Event::Load(0), Event::Light(0)]
        );
    }

    #[test]
    fn test_every_light_is_preceded_by_blank() {
        let video = VideoBuffer::new();
        for mode in BrightnessMode::ALL {
            let mut mux = Multiplexer::new(mode);
            for _ in 0..mux.frame_ticks() {
                let mut panel = MockPanel::new();
                mux.tick(&video, &mut panel).unwrap();
                let light = panel
                    .events
                    .iter()
                    .position(|e| matches!(e, Event::Light(_)))
                    .unwrap();
                assert_eq!(panel.events[0], Event::Blank);
                assert!(light > 0);
            }
        }
    }

    #[test]
    fn test_frame_visits_each_position() {
        let video = VideoBuffer::new();
        let mut mux = Multiplexer::new(BrightnessMode::Medium);
        assert_eq!(mux.frame_ticks(), 75);

        let mut visits = [0u32; POSITIONS];
        for _ in 0..mux.frame_ticks() {
            let mut panel = MockPanel::new();
            let slice = mux.tick(&video, &mut panel).unwrap();
            visits[slice.position as usize] += 1;
        }
        assert_eq!(visits, [15; POSITIONS]);
        assert_eq!(mux.scanner().position(), 0);
        assert_eq!(mux.scanner().step(), 1);
    }

    #[test]
    fn test_set_mode() {
        let mut mux = Multiplexer::new(BrightnessMode::Medium);
        mux.set_mode(BrightnessMode::Low);
        assert_eq!(mux.mode(), BrightnessMode::Low);
        assert_eq!(mux.frame_ticks(), 5 * 57);
    }

    #[test]
    fn test_panel_error_still_advances() {
        let video = VideoBuffer::new();
        let mut mux = Multiplexer::new(BrightnessMode::Medium);
        let mut panel = MockPanel::new();
        panel.fail_load = true;

        assert_eq!(mux.tick(&video, &mut panel), Err(MockFault));
        assert_eq!(mux.scanner().step(), 2);

        panel.fail_load = false;
        let slice = mux.tick(&video, &mut panel).unwrap();
        assert_eq!(slice.position, 0);
    }
}
