//! Error types for lexord-core organized by pipeline stage.

use thiserror::Error;

/// Pipeline error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Record classification stage error
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Score normalization stage error
    #[error(transparent)]
    Score(#[from] ScoreError),

    /// Reading segmentation stage error
    #[error(transparent)]
    Segment(#[from] SegmentError),

    /// Syllable codec error
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Decoded syllable does not match the composed original.
    ///
    /// Signals a codec or segmenter defect, never bad input; the pipeline
    /// aborts instead of emitting an unverified encoding.
    #[error("round-trip mismatch: {composed:?} re-decoded as {decoded:?}")]
    RoundTrip { composed: String, decoded: String },

    /// IO error while streaming records
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Record shape errors.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Line does not split into exactly reading, value and score
    #[error("expected 3 fields (reading, value, score), got {got}: {line:?}")]
    FieldCount { got: usize, line: String },
}

/// Score normalization errors.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Score token is not a decimal numeral
    #[error("unparsable score: {0:?}")]
    Unparsable(String),

    /// Score parsed to an infinity or NaN
    #[error("non-finite score: {0:?}")]
    NonFinite(String),
}

/// Reading segmentation errors.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Adjacent, leading or trailing separators produce an empty component
    #[error("empty syllable component {index} in reading {reading:?}")]
    EmptySyllable { reading: String, index: usize },
}

/// Syllable codec errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Composed text is not a recognized syllable
    #[error("unrecognized syllable: {0:?}")]
    UnknownSyllable(String),

    /// Ordinal text is not a valid canonical encoding
    #[error("malformed ordinal: {0:?}")]
    MalformedOrdinal(String),
}

/// Result type alias for lexord-core operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
