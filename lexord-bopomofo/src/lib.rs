//! lexord-bopomofo: Bopomofo (zhuyin) syllable codec.
//!
//! A Bopomofo syllable is at most one consonant, one middle vowel, one vowel
//! and one tone marker. This crate packs those components into a 16-bit
//! field ([`Syllable`]), derives a mixed-radix absolute order from them, and
//! renders that order as a two-character base-79 ordinal string. The
//! [`BopomofoCodec`] plugs the whole thing into
//! `lexord_core::SyllableCodec`.
//!
//! # Quick Start
//!
//! ```ignore
//! use lexord_bopomofo::BopomofoCodec;
//! use lexord_core::SyllableCodec;
//!
//! let codec = BopomofoCodec;
//! let ordinal = codec.encode("ㄅㄛ")?;
//! assert_eq!(codec.decode(&ordinal)?, "ㄅㄛ");
//! ```

pub mod charmap;
pub mod codec;
pub mod syllable;

pub use codec::BopomofoCodec;
pub use syllable::Syllable;
