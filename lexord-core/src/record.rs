//! Record classification for raw dictionary lines.

use crate::error::{RecordError, Result};

/// Lines starting with this character are comments.
pub const COMMENT_MARKER: char = '#';

/// Readings starting with this character are literal entries, emitted verbatim.
pub const LITERAL_MARKER: char = '_';

/// One dictionary entry borrowed from a single input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record<'a> {
    /// Composed phonetic reading, or a literal token for pass-through entries
    pub reading: &'a str,
    /// Opaque dictionary value, preserved verbatim
    pub value: &'a str,
    /// Weight as a decimal numeral in text form
    pub score: &'a str,
}

/// Classification of one raw input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank line or comment, produces no output
    Skip,
    /// Literal entry whose reading is emitted unchanged
    PassThrough(Record<'a>),
    /// Phonetic entry whose reading is segmented and re-encoded
    Phonetic(Record<'a>),
}

/// Classify one raw line as skip, pass-through or phonetic.
pub fn classify(line: &str) -> Result<Line<'_>, RecordError> {
    if line.starts_with(COMMENT_MARKER) {
        return Ok(Line::Skip);
    }

    let mut fields = line.split_ascii_whitespace();
    let Some(reading) = fields.next() else {
        return Ok(Line::Skip);
    };
    let (Some(value), Some(score), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(RecordError::FieldCount {
            got: line.split_ascii_whitespace().count(),
            line: line.to_string(),
        });
    };

    let record = Record {
        reading,
        value,
        score,
    };
    if reading.starts_with(LITERAL_MARKER) {
        Ok(Line::PassThrough(record))
    } else {
        Ok(Line::Phonetic(record))
    }
}
