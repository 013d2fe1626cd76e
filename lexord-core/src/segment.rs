//! Reading segmentation into composed syllables.

use crate::error::{Result, SegmentError};

/// Separator between syllables in a composed reading.
pub const SYLLABLE_SEPARATOR: char = '-';

/// Split a composed reading into its ordered, non-empty syllable components.
///
/// A reading without a separator is a single one-syllable sequence. Empty
/// components from adjacent, leading or trailing separators are malformed
/// input and never silently skipped.
pub fn segment(reading: &str) -> Result<Vec<&str>, SegmentError> {
    reading
        .split(SYLLABLE_SEPARATOR)
        .enumerate()
        .map(|(index, component)| {
            if component.is_empty() {
                Err(SegmentError::EmptySyllable {
                    reading: reading.to_string(),
                    index,
                })
            } else {
                Ok(component)
            }
        })
        .collect()
}
