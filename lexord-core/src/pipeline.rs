//! Pipeline driver: classify, re-encode and emit dictionary records.

use std::io::{BufRead, Write};

use crate::codec::SyllableCodec;
use crate::error::{Error, Result};
use crate::record::{self, Line, Record};
use crate::score;
use crate::segment;

/// Line counts from one pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Records written to the output
    pub emitted: u64,
    /// Blank and comment lines that produced no output
    pub skipped: u64,
}

/// Stateless per-record transformation pipeline over a syllable codec.
///
/// Each line is fully read, classified, transformed and written before the
/// next line is touched; nothing is carried across records.
pub struct Pipeline<C> {
    codec: C,
}

impl<C: SyllableCodec> Pipeline<C> {
    /// Create a pipeline over the given codec.
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    /// Re-encode a composed reading into its canonical ordinal form.
    ///
    /// Each syllable is encoded, decoded back and compared against the
    /// original before its ordinal is appended; a mismatch aborts the record
    /// with [`Error::RoundTrip`]. The output reading is the flat
    /// concatenation of the per-syllable ordinals, with no separators —
    /// the codec's fixed-width alphabet keeps it self-delimiting.
    pub fn reencode_reading(&self, reading: &str) -> Result<String> {
        let mut encoded = String::new();
        for composed in segment::segment(reading)? {
            let ordinal = self.codec.encode(composed)?;
            let decoded = self.codec.decode(&ordinal)?;
            if decoded != composed {
                return Err(Error::RoundTrip {
                    composed: composed.to_string(),
                    decoded,
                });
            }
            encoded.push_str(&ordinal);
        }
        Ok(encoded)
    }

    /// Transform one raw line into its output line, if any.
    ///
    /// Returns `None` for blank and comment lines, `Some` for emitted
    /// records.
    pub fn process_line(&self, line: &str) -> Result<Option<String>> {
        match record::classify(line)? {
            Line::Skip => Ok(None),
            Line::PassThrough(record) => self.emit(record.reading, record).map(Some),
            Line::Phonetic(record) => {
                let reading = self.reencode_reading(record.reading)?;
                self.emit(&reading, record).map(Some)
            }
        }
    }

    fn emit(&self, reading: &str, record: Record<'_>) -> Result<String> {
        let score = score::normalize(record.score)?;
        Ok(format!("{reading} {} {score}", record.value))
    }

    /// Drive a whole record stream, one output line per emitted record.
    ///
    /// Lines are processed strictly in input order with no lookahead. The
    /// first error aborts the run; lines already written stay valid.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<RunStats> {
        let mut stats = RunStats::default();
        for line in reader.lines() {
            let line = line?;
            match self.process_line(&line)? {
                Some(output) => {
                    writeln!(writer, "{output}")?;
                    stats.emitted += 1;
                }
                None => stats.skipped += 1,
            }
        }

        tracing::debug!(
            emitted = stats.emitted,
            skipped = stats.skipped,
            "record stream drained"
        );

        Ok(stats)
    }
}
