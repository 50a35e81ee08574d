/*!
 * Timecode diagnostics for parsed caption tracks.
 *
 * This module checks that caption timing is:
 * - Logically consistent (start < end)
 * - Non-overlapping within one track
 *
 * Findings are diagnostics only; the merge sweep handles all of these
 * shapes without error.
 */

use log::debug;

use crate::caption_parser::Caption;

/// Types of timing issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimingIssue {
    /// Start time is at or after end time
    InvertedRange {
        /// Position of the caption within its track
        index: usize,
        from_ms: u64,
        to_ms: u64,
    },
    /// Caption starts before the previous one ends
    OverlapsPrevious {
        /// Position of the caption within its track
        index: usize,
        /// Position of the overlapped caption
        prev_index: usize,
        overlap_ms: u64,
    },
}

impl std::fmt::Display for TimingIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingIssue::InvertedRange { index, from_ms, to_ms } => {
                write!(
                    f,
                    "Caption {}: inverted range, start {}ms >= end {}ms",
                    index + 1,
                    from_ms,
                    to_ms
                )
            }
            TimingIssue::OverlapsPrevious { index, prev_index, overlap_ms } => {
                write!(
                    f,
                    "Caption {} overlaps caption {} by {}ms",
                    index + 1,
                    prev_index + 1,
                    overlap_ms
                )
            }
        }
    }
}

/// Result of checking all captions in a track
#[derive(Debug, Clone)]
pub struct TimingReport {
    /// Issues found, in caption order
    pub issues: Vec<TimingIssue>,
    /// Number of overlapping captions
    pub overlap_count: usize,
}

impl TimingReport {
    /// Whether the track had no timing issues
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check one track's captions for timing issues.
///
/// Overlap detection sorts by start time first, so out-of-order tracks are
/// checked the same way ordered ones are.
pub fn check_track(captions: &[Caption]) -> TimingReport {
    let mut issues = Vec::new();
    let mut overlap_count = 0;

    for (index, caption) in captions.iter().enumerate() {
        if caption.to <= caption.from {
            issues.push(TimingIssue::InvertedRange {
                index,
                from_ms: caption.from.as_millis(),
                to_ms: caption.to.as_millis(),
            });
        }
    }

    if captions.len() > 1 {
        let mut sorted_indices: Vec<usize> = (0..captions.len()).collect();
        sorted_indices.sort_by_key(|&i| captions[i].from);

        for pair in sorted_indices.windows(2) {
            let current = &captions[pair[0]];
            let next = &captions[pair[1]];

            if current.to > next.from && current.from < current.to {
                overlap_count += 1;
                issues.push(TimingIssue::OverlapsPrevious {
                    index: pair[1],
                    prev_index: pair[0],
                    overlap_ms: current.to.as_millis() - next.from.as_millis(),
                });
            }
        }
    }

    debug!(
        "Timing check: {} captions, {} issues, {} overlaps",
        captions.len(),
        issues.len(),
        overlap_count
    );

    TimingReport {
        issues,
        overlap_count,
    }
}
