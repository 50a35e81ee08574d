/*!
 * Tests for the timeline merge sweep
 */

use srtmerge::time_code::TimeCode;
use srtmerge::timeline_merger::{colored_text, merge_tracks, select_tracks, Track};
use crate::common::caption;

#[test]
fn test_mergeTracks_withSingleTrack_shouldReproduceCaptions() {
    let track = Track::new(
        0,
        "",
        vec![caption(0, 1_000, "A", 0), caption(1_000, 2_000, "B", 0)],
    );

    let segments = merge_tracks(&[track]);

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].from, TimeCode::ZERO);
    assert_eq!(segments[0].to, TimeCode::from_millis(1_000));
    assert_eq!(segments[0].composed_text, "A");
    assert_eq!(segments[1].from, TimeCode::from_millis(1_000));
    assert_eq!(segments[1].to, TimeCode::from_millis(2_000));
    assert_eq!(segments[1].composed_text, "B");
}

/// A single out-of-order track comes out ordered by start time
#[test]
fn test_mergeTracks_withOutOfOrderCaptions_shouldOrderByStart() {
    let track = Track::new(
        0,
        "",
        vec![caption(1_000, 2_000, "B", 0), caption(0, 1_000, "A", 0)],
    );

    let segments = merge_tracks(&[track]);

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].composed_text, "A");
    assert_eq!(segments[1].composed_text, "B");
}

/// Overlap between two tracks splits at every boundary
#[test]
fn test_mergeTracks_withPartialOverlap_shouldSplitAtBoundaries() {
    let track0 = Track::new(0, "", vec![caption(0, 2_000, "X", 0)]);
    let track1 = Track::new(1, "", vec![caption(1_000, 3_000, "Y", 1)]);

    let segments = merge_tracks(&[track0, track1]);

    assert_eq!(segments.len(), 3);

    assert_eq!(segments[0].from, TimeCode::ZERO);
    assert_eq!(segments[0].to, TimeCode::from_millis(1_000));
    assert_eq!(segments[0].composed_text, "X");

    assert_eq!(segments[1].from, TimeCode::from_millis(1_000));
    assert_eq!(segments[1].to, TimeCode::from_millis(2_000));
    assert_eq!(segments[1].composed_text, "X\nY");

    assert_eq!(segments[2].from, TimeCode::from_millis(2_000));
    assert_eq!(segments[2].to, TimeCode::from_millis(3_000));
    assert_eq!(segments[2].composed_text, "Y");
}

/// Identical ranges on two tracks collapse to one segment
#[test]
fn test_mergeTracks_withIdenticalRanges_shouldEmitOneSegment() {
    let track0 = Track::new(0, "", vec![caption(0, 1_000, "A", 0)]);
    let track1 = Track::new(1, "", vec![caption(0, 1_000, "B", 1)]);

    let segments = merge_tracks(&[track0, track1]);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].composed_text, "A\nB");
}

/// Composed lines follow ascending track index, not slice order
#[test]
fn test_mergeTracks_withReversedTrackOrder_shouldComposeByTrackIndex() {
    let track1 = Track::new(1, "", vec![caption(0, 1_000, "B", 1)]);
    let track0 = Track::new(0, "", vec![caption(0, 1_000, "A", 0)]);

    let segments = merge_tracks(&[track1, track0]);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].composed_text, "A\nB");
}

/// A short caption inside a long one splits it in three
#[test]
fn test_mergeTracks_withNestedCaption_shouldClampSurroundingSegments() {
    let track0 = Track::new(0, "", vec![caption(0, 10_000, "A", 0)]);
    let track1 = Track::new(1, "", vec![caption(2_000, 3_000, "B", 1)]);

    let segments = merge_tracks(&[track0, track1]);

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].to, TimeCode::from_millis(2_000));
    assert_eq!(segments[1].composed_text, "A\nB");
    assert_eq!(segments[1].to, TimeCode::from_millis(3_000));
    assert_eq!(segments[2].from, TimeCode::from_millis(3_000));
    assert_eq!(segments[2].to, TimeCode::from_millis(10_000));
    assert_eq!(segments[2].composed_text, "A");
}

/// Boundary points in a silent gap produce no segment
#[test]
fn test_mergeTracks_withGap_shouldSkipSilentRange() {
    let track = Track::new(
        0,
        "",
        vec![caption(0, 1_000, "A", 0), caption(5_000, 6_000, "B", 0)],
    );

    let segments = merge_tracks(&[track]);

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].to, TimeCode::from_millis(1_000));
    assert_eq!(segments[1].from, TimeCode::from_millis(5_000));
}

/// A zero-width caption is never active but its boundary still splits others
#[test]
fn test_mergeTracks_withZeroWidthCaption_shouldSplitWithoutContributing() {
    let track0 = Track::new(0, "", vec![caption(0, 2_000, "A", 0)]);
    let track1 = Track::new(1, "", vec![caption(1_000, 1_000, "Z", 1)]);

    let segments = merge_tracks(&[track0, track1]);

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].to, TimeCode::from_millis(1_000));
    assert_eq!(segments[1].from, TimeCode::from_millis(1_000));
    assert_eq!(segments[1].composed_text, "A");
}

/// An inverted range alone is never active
#[test]
fn test_mergeTracks_withInvertedRangeOnly_shouldEmitNothing() {
    let track = Track::new(0, "", vec![caption(2_000, 1_000, "X", 0)]);

    let segments = merge_tracks(&[track]);

    assert!(segments.is_empty());
}

#[test]
fn test_mergeTracks_withNoTracks_shouldEmitNothing() {
    assert!(merge_tracks(&[]).is_empty());
}

/// Adjacent output segments never overlap
#[test]
fn test_mergeTracks_withManyOverlaps_shouldKeepSegmentsDisjoint() {
    let track0 = Track::new(
        0,
        "",
        vec![caption(0, 4_000, "A", 0), caption(6_000, 9_000, "B", 0)],
    );
    let track1 = Track::new(
        1,
        "",
        vec![caption(1_000, 7_000, "C", 1), caption(8_500, 10_000, "D", 1)],
    );

    let segments = merge_tracks(&[track0, track1]);

    for pair in segments.windows(2) {
        assert!(
            pair[0].to <= pair[1].from,
            "segments overlap: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Every boundary with an active caption starts a segment
#[test]
fn test_mergeTracks_withActiveBoundaries_shouldStartSegmentAtEach() {
    let track0 = Track::new(0, "", vec![caption(0, 2_000, "X", 0)]);
    let track1 = Track::new(1, "", vec![caption(1_000, 3_000, "Y", 1)]);

    let segments = merge_tracks(&[track0.clone(), track1.clone()]);

    for active_boundary in [0u64, 1_000, 2_000] {
        assert!(
            segments
                .iter()
                .any(|s| s.from == TimeCode::from_millis(active_boundary)),
            "no segment starts at {}",
            active_boundary
        );
    }

    // The final boundary terminates the last segment instead
    assert_eq!(segments.last().unwrap().to, TimeCode::from_millis(3_000));
}

#[test]
fn test_mergeTracks_withColorTags_shouldWrapAttributedLines() {
    let track0 = Track::new(0, "", vec![caption(0, 2_000, "X", 0)]);
    let track1 = Track::new(1, "yellow", vec![caption(1_000, 3_000, "Y", 1)]);

    let segments = merge_tracks(&[track0, track1]);

    assert_eq!(segments[0].composed_text, "X");
    assert_eq!(segments[1].composed_text, "X\n<font color='yellow'>Y</font>");
    assert_eq!(segments[2].composed_text, "<font color='yellow'>Y</font>");
}

#[test]
fn test_coloredText_withEmptyTag_shouldReturnRawText() {
    let track = Track::new(0, "", vec![]);
    let c = caption(0, 1_000, "plain", 0);

    assert_eq!(colored_text(&c, &[track]), "plain");
}

#[test]
fn test_coloredText_withTag_shouldWrapInFontMarker() {
    let track = Track::new(0, "cyan", vec![]);
    let c = caption(0, 1_000, "tinted", 0);

    assert_eq!(colored_text(&c, &[track]), "<font color='cyan'>tinted</font>");
}

#[test]
fn test_selectTracks_withSubset_shouldRemapIndices() {
    let tracks = vec![
        Track::new(0, "", vec![caption(0, 1_000, "zero", 0)]),
        Track::new(1, "yellow", vec![caption(0, 1_000, "one", 1)]),
        Track::new(2, "cyan", vec![caption(0, 1_000, "two", 2)]),
    ];

    let selected = select_tracks(&tracks, &[2, 0]);

    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].index, 0);
    assert_eq!(selected[0].color_tag, "cyan");
    assert!(selected[0].captions.iter().all(|c| c.track_index == 0));
    assert_eq!(selected[1].index, 1);
    assert_eq!(selected[1].color_tag, "");
    assert!(selected[1].captions.iter().all(|c| c.track_index == 1));

    // Originals are copies, not moves
    assert_eq!(tracks[2].captions[0].track_index, 2);
    assert_eq!(tracks[0].captions[0].track_index, 0);
}

#[test]
fn test_selectTracks_withOutOfRangePick_shouldSkipIt() {
    let tracks = vec![Track::new(0, "", vec![caption(0, 1_000, "zero", 0)])];

    let selected = select_tracks(&tracks, &[5, 0]);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].captions[0].text, "zero");
}

/// Selection order defines attribution order in the merged output
#[test]
fn test_selectTracks_withReversedPicks_shouldFlipAttributionOrder() {
    let tracks = vec![
        Track::new(0, "", vec![caption(0, 1_000, "first", 0)]),
        Track::new(1, "", vec![caption(0, 1_000, "second", 1)]),
    ];

    let segments = merge_tracks(&select_tracks(&tracks, &[1, 0]));

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].composed_text, "second\nfirst");
}
