//! Alternate numeral shapes
//!
//! Every set is defined as a fixed list of glyph writes applied on top of
//! the canonical digits, so loading a set is idempotent and loading
//! [`NumeralSet::Standard`] always restores the defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::table::GlyphTable;

/// Canonical digit glyphs, '0' through '9'
#[rustfmt::skip]
const CANONICAL_DIGITS: [(u8, [u8; 3]); 10] = [
    (b'0', [15, 0, 15]),  // square zero, no slash
    (b'1', [0, 0, 3]),    // straight one, right side
    (b'2', [63, 0, 5]),
    (b'3', [47, 0, 3]),
    (b'4', [48, 0, 11]),
    (b'5', [63, 0, 10]),
    (b'6', [63, 0, 14]),
    (b'7', [3, 0, 3]),    // straight-side seven
    (b'8', [63, 0, 15]),
    (b'9', [63, 0, 11]),
];

const SLASHED_ZERO: (u8, [u8; 3]) = (b'0', [15, 2, 79]);
const SERIF_ONE: (u8, [u8; 3]) = (b'1', [0, 0, 67]);
const CURVY_TWO: (u8, [u8; 3]) = (b'2', [47, 2, 1]);
const CURVY_THREE: (u8, [u8; 3]) = (b'3', [47, 0, 66]);
const CURVY_FIVE: (u8, [u8; 3]) = (b'5', [31, 0, 136]);
const TOP_ANGLE_SEVEN: (u8, [u8; 3]) = (b'7', [3, 1, 64]);
const HALF_ANGLE_SEVEN: (u8, [u8; 3]) = (b'7', [51, 1, 64]);

#[rustfmt::skip]
const SKINNY_DIGITS: [(u8, [u8; 3]); 9] = [
    (b'0', [10, 1, 35]),
    (b'2', [42, 1, 1]),
    (b'3', [42, 0, 3]),
    (b'4', [32, 0, 35]),
    (b'5', [42, 0, 34]),
    (b'6', [42, 1, 34]),
    (b'7', [2, 0, 3]),
    (b'8', [42, 1, 35]),
    (b'9', [42, 0, 35]),
];

const SKINNY_CURVY_THREE: (u8, [u8; 3]) = (b'3', [42, 0, 66]);

const CURVY: [(u8, [u8; 3]); 2] = [CURVY_THREE, TOP_ANGLE_SEVEN];
const EURO: [(u8, [u8; 3]); 3] = [SERIF_ONE, CURVY_THREE, HALF_ANGLE_SEVEN];
const EURO_CURVY: [(u8, [u8; 3]); 5] = [
    SERIF_ONE,
    CURVY_TWO,
    CURVY_THREE,
    CURVY_FIVE,
    HALF_ANGLE_SEVEN,
];
const SKINNY_B_EXTRAS: [(u8, [u8; 3]); 2] = [SERIF_ONE, SKINNY_CURVY_THREE];

/// Named digit variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumeralSet {
    /// Canonical digits
    #[default]
    Standard,
    /// Canonical digits with a slashed zero
    SlashedZero,
    /// Curvy three, top-angle seven
    Curvy,
    /// Curvy three, top-angle seven, slashed zero
    CurvySlashed,
    /// Serif one, curvy three, half-angle seven with cross-stroke
    Euro,
    /// Euro digits with a slashed zero
    EuroSlashed,
    /// Euro digits plus curvy two and five
    EuroCurvy,
    /// Euro curvy digits with a slashed zero
    EuroCurvySlashed,
    /// Condensed digits
    SkinnyA,
    /// Condensed digits with serif one and curvy three
    SkinnyB,
}

impl NumeralSet {
    /// All sets in index order
    pub const ALL: [NumeralSet; 10] = [
        NumeralSet::Standard,
        NumeralSet::SlashedZero,
        NumeralSet::Curvy,
        NumeralSet::CurvySlashed,
        NumeralSet::Euro,
        NumeralSet::EuroSlashed,
        NumeralSet::EuroCurvy,
        NumeralSet::EuroCurvySlashed,
        NumeralSet::SkinnyA,
        NumeralSet::SkinnyB,
    ];

    /// Look up a set by its index (0-9)
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Index of this set (0-9)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether this set replaces zero with the slashed form
    pub fn slashed_zero(self) -> bool {
        matches!(
            self,
            NumeralSet::SlashedZero
                | NumeralSet::CurvySlashed
                | NumeralSet::EuroSlashed
                | NumeralSet::EuroCurvySlashed
        )
    }

    /// Glyph writes that turn the canonical digits into this set
    fn overrides(self) -> impl Iterator<Item = &'static (u8, [u8; 3])> {
        let zero: &'static [(u8, [u8; 3])] = if self.slashed_zero() {
            &[SLASHED_ZERO]
        } else {
            &[]
        };
        let (shapes, extras): (&'static [(u8, [u8; 3])], &'static [(u8, [u8; 3])]) = match self {
            NumeralSet::Standard | NumeralSet::SlashedZero => (&[], &[]),
            NumeralSet::Curvy | NumeralSet::CurvySlashed => (&CURVY, &[]),
            NumeralSet::Euro | NumeralSet::EuroSlashed => (&EURO, &[]),
            NumeralSet::EuroCurvy | NumeralSet::EuroCurvySlashed => (&EURO_CURVY, &[]),
            NumeralSet::SkinnyA => (&SKINNY_DIGITS, &[]),
            NumeralSet::SkinnyB => (&SKINNY_DIGITS, &SKINNY_B_EXTRAS),
        };
        zero.iter().chain(shapes).chain(extras)
    }
}

impl GlyphTable {
    /// Replace the digit glyphs with a numeral set
    ///
    /// The canonical digits are restored first, then the set's writes are
    /// applied, so the result never depends on a previously loaded set.
    pub fn load_numerals(&mut self, set: NumeralSet) {
        for (code, [a, b, c]) in CANONICAL_DIGITS {
            self.set(code, a, b, c);
        }
        for &(code, [a, b, c]) in set.overrides() {
            self.set(code, a, b, c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Glyph;

    fn digits(table: &GlyphTable) -> [Glyph; 10] {
        core::array::from_fn(|d| table.glyph_or_blank(b'0' + d as u8))
    }

    #[test]
    fn test_canonical_matches_default_font() {
        let table = GlyphTable::new();
        for (code, bytes) in CANONICAL_DIGITS {
            assert_eq!(table.get(code).unwrap().bytes(), bytes);
        }
    }

    #[test]
    fn test_slashed_zero_only_changes_zero() {
        let standard = GlyphTable::new();
        let mut table = GlyphTable::new();
        table.load_numerals(NumeralSet::SlashedZero);

        let zero = table.get(b'0').unwrap().pattern().bits();
        let plain = standard.get(b'0').unwrap().pattern().bits();

        // Slash adds segments, never removes
        assert_eq!(zero & plain, plain);
        assert_ne!(zero, plain);
        assert_eq!(&digits(&table)[1..], &digits(&standard)[1..]);
    }

    #[test]
    fn test_sets_are_idempotent() {
        for set in NumeralSet::ALL {
            let mut once = GlyphTable::new();
            once.load_numerals(set);
            let mut twice = once.clone();
            twice.load_numerals(set);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_standard_restores_defaults() {
        let mut table = GlyphTable::new();
        table.load_numerals(NumeralSet::SkinnyB);
        table.load_numerals(NumeralSet::Standard);
        assert_eq!(table, GlyphTable::new());
    }

    #[test]
    fn test_set_independent_of_previous() {
        let mut direct = GlyphTable::new();
        direct.load_numerals(NumeralSet::Euro);

        let mut via_skinny = GlyphTable::new();
        via_skinny.load_numerals(NumeralSet::SkinnyA);
        via_skinny.load_numerals(NumeralSet::Euro);

        assert_eq!(direct, via_skinny);
    }

    #[test]
    fn test_override_writes() {
        let count = |set: NumeralSet| set.overrides().count();
        assert_eq!(count(NumeralSet::Standard), 0);
        assert_eq!(count(NumeralSet::SlashedZero), 1);
        assert_eq!(count(NumeralSet::EuroCurvySlashed), 6);
        assert_eq!(count(NumeralSet::SkinnyB), 11);

        for set in NumeralSet::ALL {
            assert!(set.overrides().all(|(code, _)| code.is_ascii_digit()));
            assert_eq!(
                set.overrides().next() == Some(&SLASHED_ZERO),
                set.slashed_zero()
            );
        }
    }

    #[test]
    fn test_skinny_b() {
        let mut table = GlyphTable::new();
        table.load_numerals(NumeralSet::SkinnyB);
        assert_eq!(table.get(b'1').unwrap().bytes(), [0, 0, 67]);
        assert_eq!(table.get(b'3').unwrap().bytes(), [42, 0, 66]);
        assert_eq!(table.get(b'0').unwrap().bytes(), [10, 1, 35]);
    }

    #[test]
    fn test_non_digits_untouched() {
        let mut table = GlyphTable::new();
        table.set(b'a', 9, 9, 9);
        table.load_numerals(NumeralSet::EuroCurvySlashed);
        assert_eq!(table.get(b'a'), Some(Glyph::new(9, 9, 9)));
        assert_eq!(table.get(b'A'), GlyphTable::new().get(b'A'));
    }

    #[test]
    fn test_from_index() {
        assert_eq!(NumeralSet::from_index(0), Some(NumeralSet::Standard));
        assert_eq!(NumeralSet::from_index(9), Some(NumeralSet::SkinnyB));
        assert_eq!(NumeralSet::from_index(10), None);
        for set in NumeralSet::ALL {
            assert_eq!(NumeralSet::from_index(set.index()), Some(set));
        }
    }
}
