use crate::caption_parser::TIMESTAMP_SEPARATOR;
use crate::timeline_merger::Segment;

// @module: Canonical SubRip output

// @returns: One SRT record with the given visible index
fn record_to_text(num: usize, segment: &Segment) -> String {
    format!(
        "{}\n{}{}{}\n{}",
        num,
        segment.from.format(),
        TIMESTAMP_SEPARATOR,
        segment.to.format(),
        segment.composed_text
    )
}

/// Serialize ordered segments back to SubRip text.
///
/// Records are numbered from 1 and separated by a single blank line, with no
/// blank line after the last record. For the grammar subset the merger
/// emits, this is the exact textual inverse of the parser.
pub fn serialize_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| record_to_text(index + 1, segment))
        .collect::<Vec<_>>()
        .join("\n\n")
}
