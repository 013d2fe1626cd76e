//! `SyllableCodec` implementation over the Bopomofo character table.

use lexord_core::codec::SyllableCodec;
use lexord_core::error::{CodecError, Result};

use crate::syllable::Syllable;

/// Bopomofo syllable codec producing two-character absolute-order ordinals.
#[derive(Clone, Copy, Debug, Default)]
pub struct BopomofoCodec;

impl SyllableCodec for BopomofoCodec {
    fn encode(&self, composed: &str) -> Result<String, CodecError> {
        Ok(Syllable::from_composed(composed)?.absolute_order_string())
    }

    fn decode(&self, ordinal: &str) -> Result<String, CodecError> {
        Ok(Syllable::from_absolute_order_string(ordinal)?.composed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_vectors() {
        let codec = BopomofoCodec;

        assert_eq!(codec.encode("ㄅㄛ").unwrap(), "C2");
        assert_eq!(codec.encode("ㄆㄛ").unwrap(), "D2");
        assert_eq!(codec.encode("ㄇㄚˇ").unwrap(), "KP");
    }

    #[test]
    fn decodes_known_vectors() {
        let codec = BopomofoCodec;

        assert_eq!(codec.decode("C2").unwrap(), "ㄅㄛ");
        assert_eq!(codec.decode("D2").unwrap(), "ㄆㄛ");
        assert_eq!(codec.decode("KP").unwrap(), "ㄇㄚˇ");
    }

    #[test]
    fn round_trips_composed_syllables() {
        let codec = BopomofoCodec;

        for text in ["ㄓㄨㄥ", "ㄨㄣˊ", "ㄦ", "ㄌㄩˋ", "ㄙ", "ㄇㄚ˙"] {
            let ordinal = codec.encode(text).unwrap();
            assert_eq!(codec.decode(&ordinal).unwrap(), text, "round trip of {text}");
        }
    }

    #[test]
    fn rejects_non_bopomofo_text() {
        let codec = BopomofoCodec;

        assert!(matches!(
            codec.encode("latin"),
            Err(CodecError::UnknownSyllable(_))
        ));
    }

    #[test]
    fn rejects_malformed_ordinals() {
        let codec = BopomofoCodec;

        assert!(matches!(
            codec.decode("!"),
            Err(CodecError::MalformedOrdinal(_))
        ));
    }
}
