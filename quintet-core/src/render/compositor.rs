//! Frame composition
//!
//! Two families of loaders feed the display:
//!
//! - **Direct** loaders overwrite the [`VideoBuffer`] immediately at one
//!   uniform brightness. Good for plain text and whole-frame on/off fades.
//! - **Additive** loaders sum logical brightness into the
//!   [`OffScreenBuffer`]. Layers compose (digits, then blinking
//!   punctuation on top) and nothing is visible until published.
//!
//! Publishing copies the off-screen buffer through the brightness lookup
//! into the video buffer. [`Compositor::publish`] also records the frame
//! as the starting point of the next cross-fade.
//!
//! Display strings are five characters, written left to right: the
//! first character lands in position 4, the last in position 0. Shorter
//! strings are padded with spaces, longer ones truncated.

use crate::buffer::{
    OffScreenBuffer, SegmentIndex, VideoBuffer, LOWER_DP, POSITIONS, SEGMENTS_PER_POSITION,
    UPPER_DP,
};
use crate::glyph::{GlyphTable, NumeralSet};

use super::blut::{osb_to_duty, to_duty, MAX_LEVEL};
use super::fade::{FadeEngine, FadeState};

/// Characters consumed by every string loader
pub const WORD_LEN: usize = POSITIONS;

/// Five display characters, leftmost first
pub type Word = [u8; WORD_LEN];

/// Normalize text to exactly five characters
///
/// Each `char` takes one position. Non-ASCII characters map to a code
/// outside the glyph table, so they render dark.
pub fn word(text: &str) -> Word {
    let mut out = [b' '; WORD_LEN];
    for (slot, c) in out.iter_mut().zip(text.chars()) {
        *slot = u8::try_from(c).ok().filter(u8::is_ascii).unwrap_or(0);
    }
    out
}

/// Decimal points selected by one character of a decimal-point string
///
/// `'1'` lights the lower point, `'2'` the upper, `'3'` both.
fn decimal_points(code: u8) -> (bool, bool) {
    match code {
        b'1' => (true, false),
        b'2' => (false, true),
        b'3' => (true, true),
        _ => (false, false),
    }
}

/// Character shown at a buffer position
#[inline]
fn char_at(word: &Word, position: usize) -> u8 {
    word[WORD_LEN - 1 - position]
}

/// Composition and fade state for one display
///
/// Owns the glyph table, the off-screen buffer with its snapshots, and
/// the fade engine. Borrows the video buffer, which is shared with the
/// refresh tick.
pub struct Compositor<'v> {
    video: &'v VideoBuffer,
    glyphs: GlyphTable,
    osb: OffScreenBuffer,
    last: OffScreenBuffer,
    fade: FadeEngine,
    level: u8,
}

impl<'v> Compositor<'v> {
    /// Create a compositor drawing into `video`
    ///
    /// Starts with the default font, cleared buffers, no fade, and the
    /// global brightness level at maximum.
    pub fn new(video: &'v VideoBuffer) -> Self {
        Self {
            video,
            glyphs: GlyphTable::new(),
            osb: OffScreenBuffer::new(),
            last: OffScreenBuffer::new(),
            fade: FadeEngine::new(),
            level: MAX_LEVEL,
        }
    }

    /// Clear both buffers and publish the empty frame
    ///
    /// Leaves the video buffer dark and the fade baseline valid.
    pub fn reset(&mut self) {
        self.clear_video();
        self.clear_osb();
        self.publish();
    }

    /// Set the global brightness level (clamped to 0-19)
    ///
    /// Also sets the length of subsequent fade steps.
    pub fn set_brightness_level(&mut self, level: u8) {
        self.level = level.min(MAX_LEVEL);
    }

    /// Global brightness level
    pub fn brightness_level(&self) -> u8 {
        self.level
    }

    /// Glyph table
    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Glyph table, for editing
    pub fn glyphs_mut(&mut self) -> &mut GlyphTable {
        &mut self.glyphs
    }

    /// Replace the digit glyphs with a numeral set
    pub fn load_numerals(&mut self, set: NumeralSet) {
        self.glyphs.load_numerals(set);
    }

    /// Overwrite the video buffer with five characters
    ///
    /// Lit segments get the duty level for `level`, unlit segments go dark.
    pub fn load_video_ascii(&mut self, text: &str, level: u8) {
        let word = word(text);
        let duty = to_duty(level);

        for position in 0..POSITIONS {
            let pattern = self.glyphs.glyph_or_blank(char_at(&word, position)).pattern();
            let base = position * SEGMENTS_PER_POSITION;
            for segment in 0..SEGMENTS_PER_POSITION {
                let value = if pattern.is_lit(segment as u8) { duty } else { 0 };
                self.video.store_linear(base + segment, value);
            }
        }
    }

    /// Overwrite decimal points in the video buffer
    ///
    /// Only selected decimal points change; every other segment keeps its
    /// value. Writing at level 0 hides a point, e.g. the one drawn by a
    /// `'.'` glyph.
    pub fn load_video_dp(&mut self, text: &str, level: u8) {
        let word = word(text);
        let duty = to_duty(level);

        for position in 0..POSITIONS {
            let (lower, upper) = decimal_points(char_at(&word, position));
            let base = position * SEGMENTS_PER_POSITION;
            if lower {
                self.video.store_linear(base + LOWER_DP as usize, duty);
            }
            if upper {
                self.video.store_linear(base + UPPER_DP as usize, duty);
            }
        }
    }

    /// Set every video segment dark
    pub fn clear_video(&mut self) {
        self.video.clear();
    }

    /// Add five characters to the off-screen buffer
    ///
    /// Lit segments gain `level`; unlit segments are untouched.
    pub fn load_osb_ascii(&mut self, text: &str, level: u8) {
        let word = word(text);
        let level = level as i8;

        for position in 0..POSITIONS {
            let pattern = self.glyphs.glyph_or_blank(char_at(&word, position)).pattern();
            let base = position * SEGMENTS_PER_POSITION;
            for segment in 0..SEGMENTS_PER_POSITION {
                if pattern.is_lit(segment as u8) {
                    self.osb.add_linear(base + segment, level);
                }
            }
        }
    }

    /// Add decimal points to the off-screen buffer
    pub fn load_osb_dp(&mut self, text: &str, level: u8) {
        let word = word(text);
        let level = level as i8;

        for position in 0..POSITIONS {
            let (lower, upper) = decimal_points(char_at(&word, position));
            let base = position * SEGMENTS_PER_POSITION;
            if lower {
                self.osb.add_linear(base + LOWER_DP as usize, level);
            }
            if upper {
                self.osb.add_linear(base + UPPER_DP as usize, level);
            }
        }
    }

    /// Add brightness to a single segment of the off-screen buffer
    pub fn load_osb_segment(&mut self, index: SegmentIndex, level: u8) {
        self.osb.add(index, level as i8);
    }

    /// Reset the off-screen buffer to zero
    pub fn clear_osb(&mut self) {
        self.osb.clear();
    }

    /// Off-screen buffer
    pub fn osb(&self) -> &OffScreenBuffer {
        &self.osb
    }

    /// Off-screen buffer, for direct drawing
    pub fn osb_mut(&mut self) -> &mut OffScreenBuffer {
        &mut self.osb
    }

    /// Composition last published with [`Compositor::publish`]
    pub fn last_osb(&self) -> &OffScreenBuffer {
        &self.last
    }

    /// Copy the off-screen buffer to the video buffer
    ///
    /// Does not update the fade baseline; use while a fade is running.
    pub fn publish_uncached(&mut self) {
        for (i, &value) in self.osb.as_slice().iter().enumerate() {
            self.video.store_linear(i, osb_to_duty(value));
        }
    }

    /// Copy the off-screen buffer to the video buffer and remember it
    ///
    /// The remembered frame is where the next [`Compositor::begin_fade`]
    /// departs from.
    pub fn publish(&mut self) {
        self.publish_uncached();
        self.last = self.osb;
    }

    /// Start a cross-fade from the last published frame to the current
    /// off-screen buffer
    ///
    /// Discards any fade in progress.
    pub fn begin_fade(&mut self) {
        self.fade.begin(&self.last, &self.osb);
    }

    /// Compute the next fade frame into the off-screen buffer
    ///
    /// Call [`Compositor::publish_uncached`] afterwards to show it. No-op
    /// when no fade is running.
    pub fn step_fade(&mut self) -> FadeState {
        self.fade.step(&mut self.osb, self.level)
    }

    /// Check if a fade is in progress
    pub fn is_fading(&self) -> bool {
        self.fade.is_fading()
    }

    /// Fade engine state
    pub fn fade(&self) -> &FadeEngine {
        &self.fade
    }
}
