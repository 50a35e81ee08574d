use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::FormatError;
use crate::time_code::TimeCode;

// @module: State-machine parser for SubRip timed text

/// Literal separator between the two timestamps of a range line
pub const TIMESTAMP_SEPARATOR: &str = " --> ";

// @const: block index line pattern
static INDEX_LINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// One timed text block from a single track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    /// Start time
    pub from: TimeCode,

    /// End time
    pub to: TimeCode,

    /// Content lines joined by '\n'
    pub text: String,

    /// Position of the owning track within the set being merged
    pub track_index: usize,
}

impl Caption {
    // @creates: New caption record
    pub fn new(from: TimeCode, to: TimeCode, text: impl Into<String>, track_index: usize) -> Self {
        Caption {
            from,
            to,
            text: text.into(),
            track_index,
        }
    }

    // @checks: Whether the caption carries any content
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Parser states, one per row of the block grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Looking for the first block's index line
    Start,
    /// Index seen, waiting for the timestamp-range line
    ExpectTimestamp,
    /// Timestamps stored, waiting for the first content line
    ReadingFirstLine,
    /// At least one content line read
    ReadingContinuation,
    /// A blank line ended the content; the block stays open until the next index line
    BetweenBlocks,
}

/// Parse one track's raw SubRip text into ordered caption records.
///
/// The machine is deliberately tolerant: index numbers are block boundary
/// markers only (never checked for sequence), stray lines outside a block
/// are skipped, and unexpected lines inside a block become content. The one
/// hard failure is a line containing the ` --> ` separator, in timestamp
/// position, whose halves do not parse as timecodes; that aborts the whole
/// track with `FormatError` and no partial captions.
///
/// End of input always flushes the pending block, so the last block needs no
/// trailing blank line. A side effect is that input containing no blocks at
/// all yields a single zero-time, empty-content record; callers that do not
/// want it filter on [`Caption::is_empty`].
pub fn parse_track(raw: &str, track_index: usize) -> Result<Vec<Caption>, FormatError> {
    let mut state = ParserState::Start;
    let mut captions: Vec<Caption> = Vec::new();

    // Pending block under construction
    let mut from: Option<TimeCode> = None;
    let mut to: Option<TimeCode> = None;
    let mut content: Vec<String> = Vec::new();

    for raw_line in raw.split('\n') {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        match state {
            ParserState::Start => {
                if INDEX_LINE_REGEX.is_match(line) {
                    state = ParserState::ExpectTimestamp;
                }
            }

            ParserState::ExpectTimestamp => {
                // Every line seen here starts a fresh block
                from = None;
                to = None;
                content.clear();

                if let Some((lhs, rhs)) = line.split_once(TIMESTAMP_SEPARATOR) {
                    from = Some(TimeCode::parse(lhs)?);
                    to = Some(TimeCode::parse(rhs)?);
                    state = ParserState::ReadingFirstLine;
                }
            }

            ParserState::ReadingFirstLine | ParserState::ReadingContinuation => {
                if line.is_empty() {
                    state = ParserState::BetweenBlocks;
                } else {
                    content.push(line.to_string());
                    state = ParserState::ReadingContinuation;
                }
            }

            ParserState::BetweenBlocks => {
                if line.is_empty() {
                    // Further blank lines belong to the block body
                    content.push(String::new());
                } else if INDEX_LINE_REGEX.is_match(line) {
                    captions.push(pending_caption(from, to, &content, track_index));
                    state = ParserState::ExpectTimestamp;
                } else {
                    content.push(line.to_string());
                    state = ParserState::ReadingContinuation;
                }
            }
        }
    }

    // The last block usually has no trailing blank line; flush whatever is pending
    captions.push(pending_caption(from, to, &content, track_index));

    Ok(captions)
}

fn pending_caption(
    from: Option<TimeCode>,
    to: Option<TimeCode>,
    content: &[String],
    track_index: usize,
) -> Caption {
    Caption::new(
        from.unwrap_or_default(),
        to.unwrap_or_default(),
        content.join("\n"),
        track_index,
    )
}
