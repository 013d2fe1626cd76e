//! Syllable codec seam between the pipeline and concrete phonetic tables.

use crate::error::{CodecError, Result};

/// Codec mapping composed syllable text to canonical ordinal strings.
///
/// Implementations must be pure and invertible over the syllables they
/// accept: `decode(encode(x)) == x` for every `x` accepted by `encode`.
/// The pipeline re-checks this per syllable and aborts the run on the
/// first violation, so a codec never has to be trusted blindly.
pub trait SyllableCodec {
    /// Encode one composed syllable into its canonical ordinal string.
    fn encode(&self, composed: &str) -> Result<String, CodecError>;

    /// Decode one canonical ordinal string back into composed syllable text.
    fn decode(&self, ordinal: &str) -> Result<String, CodecError>;
}
