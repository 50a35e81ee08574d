/*!
 * Validation module for caption timing diagnostics.
 *
 * Inverted ranges, zero-width ranges and overlapping captions are all legal
 * inputs to the merge sweep; this module reports them as warnings so that
 * hand-edited files can be cleaned up, never as errors.
 *
 * # Architecture
 *
 * - `timecodes`: Checks timing integrity of parsed tracks
 */

pub mod timecodes;

// Re-export main types
pub use timecodes::{check_track, TimingIssue, TimingReport};
