//! Editable glyph table
//!
//! Every character from space (0x20) through `'e'` (0x65) has a three-byte
//! segment mask. The table lives in RAM so glyphs can be redefined while
//! the display is running. The five codes `'a'`-`'e'` start blank and are
//! reserved for caller-defined symbols.

use crate::buffer::{SegmentPattern, SEGMENTS_PER_POSITION};

/// First code in the table (space)
pub const FIRST_CODE: u8 = b' ';

/// Last code in the table (final scratch slot)
pub const LAST_CODE: u8 = b'e';

/// Number of glyphs in the table
pub const GLYPH_COUNT: usize = (LAST_CODE - FIRST_CODE) as usize + 1;

/// Scratch slots for caller-defined symbols
pub const SCRATCH_CODES: [u8; 5] = [b'a', b'b', b'c', b'd', b'e'];

/// Packed 18-segment mask for one character
///
/// Byte 0 bits 0-7 drive segments 0-7 (bits 6 and 7 are the lower and
/// upper decimal points), byte 1 bits 0-1 drive segments 8-9, byte 2 bits
/// 0-7 drive segments 10-17.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph([u8; 3]);

impl Glyph {
    /// A glyph with no lit segments
    pub const BLANK: Self = Self([0, 0, 0]);

    /// Build from the packed bytes
    pub const fn new(a: u8, b: u8, c: u8) -> Self {
        Self([a, b, c])
    }

    /// Packed bytes
    pub const fn bytes(self) -> [u8; 3] {
        self.0
    }

    /// Decoded segment mask
    pub const fn pattern(self) -> SegmentPattern {
        SegmentPattern::from_bytes(self.0)
    }

    /// Check whether a local segment is lit
    pub const fn is_lit(self, segment: u8) -> bool {
        self.pattern().is_lit(segment)
    }

    /// One flag per segment
    pub fn segments(self) -> [bool; SEGMENTS_PER_POSITION] {
        self.pattern().to_array()
    }
}

#[rustfmt::skip]
const DEFAULT_FONT: [Glyph; GLYPH_COUNT] = [
    Glyph::new(0, 0, 0),      // space
    Glyph::new(0, 0, 3),      // !
    Glyph::new(0, 0, 40),     // "
    Glyph::new(63, 3, 255),   // #
    Glyph::new(63, 1, 42),    // $
    Glyph::new(57, 3, 106),   // %
    Glyph::new(14, 3, 98),    // &
    Glyph::new(0, 0, 64),     // '
    Glyph::new(0, 0, 192),    // (
    Glyph::new(0, 2, 16),     // )
    Glyph::new(48, 3, 240),   // *
    Glyph::new(48, 1, 32),    // +
    Glyph::new(0, 2, 0),      // ,
    Glyph::new(48, 0, 0),     // -
    Glyph::new(64, 0, 0),     // . (lower decimal point)
    Glyph::new(0, 2, 64),     // /
    Glyph::new(15, 0, 15),    // 0
    Glyph::new(0, 0, 3),      // 1
    Glyph::new(63, 0, 5),     // 2
    Glyph::new(47, 0, 3),     // 3
    Glyph::new(48, 0, 11),    // 4
    Glyph::new(63, 0, 10),    // 5
    Glyph::new(63, 0, 14),    // 6
    Glyph::new(3, 0, 3),      // 7
    Glyph::new(63, 0, 15),    // 8
    Glyph::new(63, 0, 11),    // 9
    Glyph::new(0, 1, 32),     // :
    Glyph::new(0, 2, 32),     // ;
    Glyph::new(0, 0, 192),    // <
    Glyph::new(60, 0, 0),     // =
    Glyph::new(0, 2, 16),     // >
    Glyph::new(34, 1, 1),     // ?
    Glyph::new(47, 0, 13),    // @
    Glyph::new(51, 0, 15),    // A
    Glyph::new(47, 1, 35),    // B
    Glyph::new(15, 0, 12),    // C
    Glyph::new(15, 1, 35),    // D
    Glyph::new(31, 0, 12),    // E
    Glyph::new(19, 0, 12),    // F
    Glyph::new(47, 0, 14),    // G
    Glyph::new(48, 0, 15),    // H
    Glyph::new(15, 1, 32),    // I
    Glyph::new(12, 0, 7),     // J
    Glyph::new(16, 0, 204),   // K
    Glyph::new(12, 0, 12),    // L
    Glyph::new(0, 0, 95),     // M
    Glyph::new(0, 0, 159),    // N
    Glyph::new(15, 0, 15),    // O
    Glyph::new(51, 0, 13),    // P
    Glyph::new(15, 0, 143),   // Q
    Glyph::new(51, 0, 141),   // R
    Glyph::new(63, 0, 10),    // S
    Glyph::new(3, 1, 32),     // T
    Glyph::new(12, 0, 15),    // U
    Glyph::new(0, 2, 76),     // V
    Glyph::new(0, 2, 143),    // W
    Glyph::new(0, 2, 208),    // X
    Glyph::new(0, 1, 80),     // Y
    Glyph::new(15, 2, 64),    // Z
    Glyph::new(10, 1, 32),    // [
    Glyph::new(0, 0, 144),    // backslash
    Glyph::new(5, 1, 32),     // ]
    Glyph::new(0, 2, 128),    // ^
    Glyph::new(12, 0, 0),     // _
    Glyph::new(0, 0, 16),     // `
    Glyph::new(0, 0, 0),      // scratch 'a'
    Glyph::new(0, 0, 0),      // scratch 'b'
    Glyph::new(0, 0, 0),      // scratch 'c'
    Glyph::new(0, 0, 0),      // scratch 'd'
    Glyph::new(0, 0, 0),      // scratch 'e'
];

/// Runtime-editable character to segment-mask table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: [Glyph; GLYPH_COUNT],
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphTable {
    /// Create a table holding the default font
    pub const fn new() -> Self {
        Self {
            glyphs: DEFAULT_FONT,
        }
    }

    /// Check whether a code has a table entry
    pub const fn contains(code: u8) -> bool {
        code >= FIRST_CODE && code <= LAST_CODE
    }

    /// Look up a glyph; `None` for codes outside the table
    pub fn get(&self, code: u8) -> Option<Glyph> {
        if Self::contains(code) {
            Some(self.glyphs[(code - FIRST_CODE) as usize])
        } else {
            None
        }
    }

    /// Look up a glyph, treating unknown codes as blank
    #[inline]
    pub fn glyph_or_blank(&self, code: u8) -> Glyph {
        self.get(code).unwrap_or(Glyph::BLANK)
    }

    /// Read a single packed byte (0, 1 or 2) of a glyph
    pub fn byte(&self, code: u8, offset: usize) -> Option<u8> {
        self.get(code)?.bytes().get(offset).copied()
    }

    /// Replace a glyph
    ///
    /// Codes outside the table are ignored.
    pub fn set(&mut self, code: u8, a: u8, b: u8, c: u8) {
        if Self::contains(code) {
            self.glyphs[(code - FIRST_CODE) as usize] = Glyph::new(a, b, c);
        }
    }

    /// Restore the default font
    pub fn reset(&mut self) {
        self.glyphs = DEFAULT_FONT;
    }
}
