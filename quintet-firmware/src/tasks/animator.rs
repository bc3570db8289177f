//! Animator task
//!
//! Owns the compositor and drives everything the viewer sees: the boot
//! greeting, a looping demo of words with blinking decimal points, and a
//! tour of the three brightness modes. Runs in thread mode and is
//! preempted by the refresh tick at any point.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Timer};

use quintet_core::buffer::SegmentIndex;
use quintet_core::config::DisplayConfig;
use quintet_core::render::Compositor;
use quintet_core::scan::BrightnessMode;

use crate::channels::{MODE_CHANGE, PANEL_FAULT, VIDEO};

/// Decimal point blink half-period
const BLINK_MS: u64 = 500;

/// Demo words and the decimal points that blink over them
///
/// Decimal point strings use '1' for the lower point, '2' for the upper,
/// '3' for both.
const DEMO: [(&str, &str); 5] = [
    ("QUINT", "     "),
    ("12 30", "  3  "),
    ("98.6F", "     "),
    ("0 1 2", " 1 2 "),
    ("GRAY ", "    1"),
];

/// Animator task - composes frames and steps fades
#[embassy_executor::task]
pub async fn animator_task(config: DisplayConfig) {
    info!("Animator task started");

    let mut compositor = Compositor::new(&VIDEO);
    compositor.set_brightness_level(config.brightness_level);
    compositor.load_numerals(config.numeral_set);

    // Blank frame published so the first fade starts from a known state
    compositor.reset();

    let level = compositor.brightness_level();
    let step = Duration::from_millis(config.fade_step_ms as u64);
    let hold = Duration::from_millis(config.hold_ms as u64);

    compositor.clear_osb();
    compositor.load_osb_ascii(config.greeting.as_str(), level);
    crossfade(&mut compositor, step).await;
    pause(hold).await;

    loop {
        for (word, points) in DEMO {
            compositor.clear_osb();
            compositor.load_osb_ascii(word, level);
            crossfade(&mut compositor, step).await;
            blink(&mut compositor, word, points, hold).await;
        }

        sweep(&mut compositor, step).await;
        mode_tour(&mut compositor, config.brightness_mode, hold).await;
    }
}

/// Fade from the last published frame to the current off-screen buffer
///
/// Takes as many steps as the global brightness level.
async fn crossfade(compositor: &mut Compositor<'_>, step: Duration) {
    compositor.begin_fade();
    let start = Instant::now();

    while compositor.is_fading() {
        compositor.step_fade();
        compositor.publish_uncached();
        Timer::after(step).await;
    }

    // Remember the finished frame as the next fade's starting point
    compositor.publish();
    debug!("Fade done in {}ms", start.elapsed().as_millis());
}

/// Hold `word` on screen with its decimal points blinking
///
/// Each phase is composed afresh: the word, then the points layered on
/// top at the same level.
async fn blink(compositor: &mut Compositor<'_>, word: &str, points: &str, hold: Duration) {
    let level = compositor.brightness_level();
    let until = Instant::now() + hold;
    let mut on = true;

    while Instant::now() < until {
        compositor.clear_osb();
        compositor.load_osb_ascii(word, level);
        if on {
            compositor.load_osb_dp(points, level);
        }
        compositor.publish();

        on = !on;
        pause(Duration::from_millis(BLINK_MS)).await;
    }

    // Leave the word shown with its points, matching the cached frame
    compositor.clear_osb();
    compositor.load_osb_ascii(word, level);
    compositor.load_osb_dp(points, level);
    compositor.publish();
}

/// Light every segment one at a time, left to right, then fade out
async fn sweep(compositor: &mut Compositor<'_>, step: Duration) {
    let level = compositor.brightness_level();

    compositor.clear_osb();
    compositor.publish();
    for column in 0..5 {
        for segment in 0..18 {
            if let Some(index) = SegmentIndex::at_column(column, segment) {
                compositor.load_osb_segment(index, level);
                compositor.publish();
                Timer::after(step).await;
            }
        }
    }

    compositor.clear_osb();
    crossfade(compositor, step).await;
}

/// Show each brightness mode by name, then return to the configured one
///
/// Uses the direct loaders: the mode names replace the video buffer
/// outright and no fade is involved.
async fn mode_tour(compositor: &mut Compositor<'_>, configured: BrightnessMode, hold: Duration) {
    let level = compositor.brightness_level();

    for mode in BrightnessMode::ALL {
        info!("Brightness mode: {}", mode);
        MODE_CHANGE.signal(mode);

        let name = match mode {
            BrightnessMode::Low => " LOW ",
            BrightnessMode::Medium => " MED ",
            BrightnessMode::High => "HIGH ",
        };
        compositor.load_video_ascii(name, level);
        // Underline the active mode name with the lower decimal points
        compositor.load_video_dp("11111", level);
        pause(hold).await;
    }

    MODE_CHANGE.signal(configured);

    // Direct loads bypass the off-screen buffer; restart from blank
    compositor.reset();
}

/// Wait for `duration`, logging any panel fault reported meanwhile
async fn pause(duration: Duration) {
    let deadline = Instant::now() + duration;

    loop {
        match select(Timer::at(deadline), PANEL_FAULT.wait()).await {
            Either::First(()) => return,
            Either::Second(fault) => warn!("Panel fault: {}", fault),
        }
    }
}
