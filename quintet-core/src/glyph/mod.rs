//! Glyph table and numeral variants

pub mod numerals;
pub mod table;

pub use numerals::NumeralSet;
pub use table::{Glyph, GlyphTable, FIRST_CODE, GLYPH_COUNT, LAST_CODE, SCRATCH_CODES};
