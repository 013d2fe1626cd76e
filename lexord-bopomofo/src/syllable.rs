//! Bopomofo syllable bit field and absolute-order conversion.

use lexord_core::error::{CodecError, Result};

use crate::charmap;

/// Number of distinct absolute orders: 22 consonants (including none) times
/// 4 middle vowels, 14 vowels and 5 tones.
pub const TOTAL_ORDERS: u16 = 22 * 4 * 14 * 5;

/// Radix of one ordinal character.
const ORDINAL_RADIX: u16 = 79;

/// ASCII offset of the zero ordinal digit.
const ORDINAL_ZERO: u8 = b'0';

/// One Bopomofo syllable packed into a 16-bit component field.
///
/// Bits 0-4 hold the consonant, bits 5-6 the middle vowel, bits 7-10 the
/// vowel and bits 11-13 the tone marker. Tone 1 is the all-zero tone and
/// never carries a mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Syllable(u16);

impl Syllable {
    pub const CONSONANT_MASK: u16 = 0x001f;
    pub const MIDDLE_VOWEL_MASK: u16 = 0x0060;
    pub const VOWEL_MASK: u16 = 0x0780;
    pub const TONE_MASK: u16 = 0x3800;

    pub const B: u16 = 0x0001;
    pub const P: u16 = 0x0002;
    pub const M: u16 = 0x0003;
    pub const F: u16 = 0x0004;
    pub const D: u16 = 0x0005;
    pub const T: u16 = 0x0006;
    pub const N: u16 = 0x0007;
    pub const L: u16 = 0x0008;
    pub const G: u16 = 0x0009;
    pub const K: u16 = 0x000a;
    pub const H: u16 = 0x000b;
    pub const J: u16 = 0x000c;
    pub const Q: u16 = 0x000d;
    pub const X: u16 = 0x000e;
    pub const ZH: u16 = 0x000f;
    pub const CH: u16 = 0x0010;
    pub const SH: u16 = 0x0011;
    pub const R: u16 = 0x0012;
    pub const Z: u16 = 0x0013;
    pub const C: u16 = 0x0014;
    pub const S: u16 = 0x0015;

    pub const I: u16 = 0x0020;
    pub const U: u16 = 0x0040;
    pub const UE: u16 = 0x0060;

    pub const A: u16 = 0x0080;
    pub const O: u16 = 0x0100;
    pub const ER: u16 = 0x0180;
    pub const E: u16 = 0x0200;
    pub const AI: u16 = 0x0280;
    pub const EI: u16 = 0x0300;
    pub const AO: u16 = 0x0380;
    pub const OU: u16 = 0x0400;
    pub const AN: u16 = 0x0480;
    pub const EN: u16 = 0x0500;
    pub const ANG: u16 = 0x0580;
    pub const ENG: u16 = 0x0600;
    pub const ERR: u16 = 0x0680;

    pub const TONE_1: u16 = 0x0000;
    pub const TONE_2: u16 = 0x0800;
    pub const TONE_3: u16 = 0x1000;
    pub const TONE_4: u16 = 0x1800;
    pub const TONE_5: u16 = 0x2000;

    /// Build a syllable from raw component bits.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw component bits.
    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn consonant(self) -> u16 {
        self.0 & Self::CONSONANT_MASK
    }

    pub const fn middle_vowel(self) -> u16 {
        self.0 & Self::MIDDLE_VOWEL_MASK
    }

    pub const fn vowel(self) -> u16 {
        self.0 & Self::VOWEL_MASK
    }

    pub const fn tone(self) -> u16 {
        self.0 & Self::TONE_MASK
    }

    /// Overlay one component, replacing any previous component of the same
    /// category.
    fn overlay(&mut self, component: u16) {
        for mask in [
            Self::CONSONANT_MASK,
            Self::MIDDLE_VOWEL_MASK,
            Self::VOWEL_MASK,
            Self::TONE_MASK,
        ] {
            if component & mask != 0 {
                self.0 = (self.0 & !mask) | (component & mask);
            }
        }
    }

    /// Parse composed Bopomofo text, one component per character.
    ///
    /// A later component replaces an earlier one of the same category; the
    /// round-trip gate downstream rejects readings that relied on that.
    pub fn from_composed(text: &str) -> Result<Self, CodecError> {
        let mut syllable = Syllable::default();
        for c in text.chars() {
            let Some(component) = charmap::component(c) else {
                return Err(CodecError::UnknownSyllable(text.to_string()));
            };
            syllable.overlay(component);
        }
        Ok(syllable)
    }

    /// Render the syllable back to composed Bopomofo text.
    pub fn composed(self) -> String {
        let mut text = String::new();
        for component in [self.consonant(), self.middle_vowel(), self.vowel(), self.tone()] {
            if let Some(c) = charmap::character(component) {
                text.push(c);
            }
        }
        text
    }

    /// Mixed-radix index of this syllable in the absolute phonetic order.
    pub const fn absolute_order(self) -> u16 {
        self.consonant()
            + (self.middle_vowel() >> 5) * 22
            + (self.vowel() >> 7) * (22 * 4)
            + (self.tone() >> 11) * (22 * 4 * 14)
    }

    /// Rebuild a syllable from its absolute order.
    pub const fn from_absolute_order(order: u16) -> Option<Self> {
        if order >= TOTAL_ORDERS {
            return None;
        }
        let consonant = order % 22;
        let middle_vowel = (order / 22) % 4;
        let vowel = (order / (22 * 4)) % 14;
        let tone = order / (22 * 4 * 14);
        Some(Self(consonant | middle_vowel << 5 | vowel << 7 | tone << 11))
    }

    /// Two-character base-79 rendering of the absolute order, low digit
    /// first, offset from ASCII `'0'`. This is the canonical ordinal string
    /// and matches the dictionary wire format byte for byte.
    pub fn absolute_order_string(self) -> String {
        let order = self.absolute_order();
        let low = ORDINAL_ZERO + (order % ORDINAL_RADIX) as u8;
        let high = ORDINAL_ZERO + (order / ORDINAL_RADIX) as u8;

        let mut ordinal = String::with_capacity(2);
        ordinal.push(low as char);
        ordinal.push(high as char);
        ordinal
    }

    /// Parse a two-character ordinal string back into a syllable.
    pub fn from_absolute_order_string(ordinal: &str) -> Result<Self, CodecError> {
        let malformed = || CodecError::MalformedOrdinal(ordinal.to_string());

        let &[low, high] = ordinal.as_bytes() else {
            return Err(malformed());
        };
        if low < ORDINAL_ZERO || high < ORDINAL_ZERO {
            return Err(malformed());
        }

        let low = (low - ORDINAL_ZERO) as u16;
        let high = (high - ORDINAL_ZERO) as u16;
        if low >= ORDINAL_RADIX {
            return Err(malformed());
        }

        Self::from_absolute_order(low + high * ORDINAL_RADIX).ok_or_else(malformed)
    }
}
