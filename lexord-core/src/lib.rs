//! lexord-core: phonetic dictionary re-encoding pipeline.
//!
//! This crate transforms dictionary records of the form
//! `<reading> <value> <score>` by rewriting the composed phonetic reading
//! into a canonical fixed-width ordinal encoding and normalizing the score's
//! textual form. The concrete phonetic encoding is supplied by a swappable
//! [`codec::SyllableCodec`] implementation.
//!
//! # Architecture
//!
//! One line flows through four stages:
//!
//! - [`record::classify`]: skip blanks and comments, split fields, route
//!   `_`-prefixed literal readings to pass-through
//! - [`segment::segment`]: split a composed reading on `-` into syllables
//! - [`pipeline::Pipeline::reencode_reading`]: encode each syllable, decode
//!   it back, and refuse to emit anything that fails the round trip
//! - [`score::normalize`]: collapse zero scores to `"0"` and render the rest
//!   with four significant digits
//!
//! # Quick Start
//!
//! ```ignore
//! use lexord_core::Pipeline;
//!
//! let pipeline = Pipeline::new(codec);
//! let stats = pipeline.run(std::io::stdin().lock(), std::io::stdout().lock())?;
//! eprintln!("{} records emitted", stats.emitted);
//! ```

pub mod codec;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod score;
pub mod segment;

pub use codec::SyllableCodec;
pub use error::{CodecError, Error, RecordError, Result, ScoreError, SegmentError};
pub use pipeline::{Pipeline, RunStats};
