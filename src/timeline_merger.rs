use std::collections::BTreeSet;

use crate::caption_parser::Caption;
use crate::time_code::TimeCode;

// @module: Sweep-line merge of independently timed caption tracks

/// One input track: the captions of a single source file plus its display color.
#[derive(Debug, Clone)]
pub struct Track {
    /// Position of this track within the set being merged
    pub index: usize,

    /// Color tag used for source attribution; empty leaves the text unwrapped
    pub color_tag: String,

    /// Captions in source order, each tagged with this track's index
    pub captions: Vec<Caption>,
}

impl Track {
    // @creates: New track
    pub fn new(index: usize, color_tag: impl Into<String>, captions: Vec<Caption>) -> Self {
        Track {
            index,
            color_tag: color_tag.into(),
            captions,
        }
    }
}

/// One interval of the merged timeline with its composed, possibly
/// multi-source, text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Start of the interval
    pub from: TimeCode,

    /// End of the interval
    pub to: TimeCode,

    /// Composed text, one source line per contributing caption
    pub composed_text: String,
}

/// Copy a subset of tracks, rewriting track indices to subset positions.
///
/// Selection order defines the new zero-based indices, and every caption is
/// copied with its `track_index` rewritten through that mapping. The
/// originals are untouched so the same track list can feed several merges.
/// Out-of-range picks are skipped.
pub fn select_tracks(all: &[Track], picks: &[usize]) -> Vec<Track> {
    picks
        .iter()
        .filter_map(|&original| all.get(original))
        .enumerate()
        .map(|(new_index, track)| {
            let captions = track
                .captions
                .iter()
                .map(|caption| Caption {
                    track_index: new_index,
                    ..caption.clone()
                })
                .collect();

            Track::new(new_index, track.color_tag.clone(), captions)
        })
        .collect()
}

/// Merge remapped tracks into one ordered, non-overlapping segment sequence.
///
/// The sweep visits the ascending set of boundary points drawn from every
/// caption's `from` and `to`; no other segment edge can exist. At each point
/// the active captions (`from <= p < to`) form one segment reaching to the
/// earliest active end time, and the previous segment is clamped so it never
/// crosses the current point. Composed text lists the active captions in
/// ascending track order, one line each.
pub fn merge_tracks(tracks: &[Track]) -> Vec<Segment> {
    let mut captions: Vec<&Caption> = Vec::new();
    let mut points: BTreeSet<TimeCode> = BTreeSet::new();

    for track in tracks {
        for caption in &track.captions {
            points.insert(caption.from);
            points.insert(caption.to);
            captions.push(caption);
        }
    }

    let mut segments: Vec<Segment> = Vec::new();

    for &point in &points {
        let mut active: Vec<&Caption> = captions
            .iter()
            .filter(|caption| caption.from <= point && caption.to > point)
            .copied()
            .collect();

        if active.is_empty() {
            continue;
        }

        // The previous segment must not extend past this boundary
        if let Some(last) = segments.last_mut() {
            last.to = last.to.min(point);
        }

        active.sort_by_key(|caption| caption.track_index);

        let to = active
            .iter()
            .map(|caption| caption.to)
            .min()
            .unwrap_or(point);

        let composed_text = active
            .iter()
            .map(|caption| colored_text(caption, tracks))
            .collect::<Vec<_>>()
            .join("\n");

        segments.push(Segment {
            from: point,
            to,
            composed_text,
        });
    }

    segments
}

/// Wrap a caption's text in its track's color marker.
///
/// An empty color tag returns the text unchanged; otherwise the text is
/// wrapped in a `<font>` element carrying the tag. The marker is a display
/// hint only and is treated as plain content when re-parsed.
pub fn colored_text(caption: &Caption, tracks: &[Track]) -> String {
    let color = tracks
        .get(caption.track_index)
        .map(|track| track.color_tag.as_str())
        .unwrap_or("");

    if color.is_empty() {
        caption.text.clone()
    } else {
        format!("<font color='{}'>{}</font>", color, caption.text)
    }
}
