use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::caption_parser::{parse_track, Caption};
use crate::caption_serializer::serialize_segments;
use crate::file_utils::{self, FileManager};
use crate::language_utils;
use crate::timeline_merger::{merge_tracks, select_tracks, Track};
use crate::validation;

// @module: Application controller for subtitle merging

/// One loaded subtitle file: parsed captions plus display metadata.
#[derive(Debug, Clone)]
pub struct LoadedTrack {
    /// Original file name, without directory
    pub file_name: String,

    /// Directory the file was read from
    pub source_dir: PathBuf,

    /// Color tag chosen for this file
    pub color_tag: String,

    /// Captions parsed from the file, tagged with the load position
    pub captions: Vec<Caption>,
}

/// Main application controller for subtitle merging
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Load and parse one subtitle file, assigning the given color.
    ///
    /// The parser's unconditional trailing record is dropped here along with
    /// any other empty-content captions; only real blocks take part in a
    /// merge. Timing oddities are logged, never fatal.
    pub fn load_track(&self, path: &Path, track_index: usize, color_tag: &str) -> Result<LoadedTrack> {
        let content = FileManager::read_to_string(path)?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let source_dir = path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let captions = parse_track(&content, track_index)
            .with_context(|| format!("Failed to parse subtitle file: {:?}", path))?;

        let captions: Vec<Caption> = captions
            .into_iter()
            .filter(|caption| !caption.is_empty())
            .collect();

        let report = validation::check_track(&captions);
        for issue in &report.issues {
            warn!("{}: {}", file_name, issue);
        }

        if let Some(language) = track_language(&file_name) {
            debug!("Track {} looks like a {} subtitle", file_name, language);
        }

        Ok(LoadedTrack {
            file_name,
            source_dir,
            color_tag: color_tag.to_string(),
            captions,
        })
    }

    /// Merge a subset of loaded tracks and serialize the result.
    ///
    /// `picks` selects tracks by load position; their order defines the
    /// attribution order in the output. The loaded tracks themselves are
    /// left untouched so further merges can reuse them.
    pub fn merge_to_text(&self, tracks: &[LoadedTrack], picks: &[usize]) -> String {
        let all: Vec<Track> = tracks
            .iter()
            .enumerate()
            .map(|(index, track)| Track::new(index, track.color_tag.clone(), track.captions.clone()))
            .collect();

        let selected = select_tracks(&all, picks);
        let segments = merge_tracks(&selected);

        serialize_segments(&segments)
    }

    /// Group loaded tracks by base file name, preserving first-seen order.
    pub fn group_by_base_name(tracks: &[LoadedTrack]) -> Vec<(String, Vec<usize>)> {
        let mut groups: Vec<(String, Vec<usize>)> = Vec::new();

        for (index, track) in tracks.iter().enumerate() {
            let base = file_utils::base_file_name(&track.file_name);

            match groups.iter_mut().find(|(name, _)| *name == base) {
                Some((_, members)) => members.push(index),
                None => groups.push((base, vec![index])),
            }
        }

        groups
    }

    /// Decide whether the loaded tracks should be merged per group.
    ///
    /// Two files always merge into one output; grouping kicks in only when
    /// more than two files split into more than one base-name group.
    pub fn should_group(tracks: &[LoadedTrack]) -> bool {
        if tracks.len() <= 2 {
            return false;
        }

        Self::group_by_base_name(tracks).len() > 1
    }

    /// Run the main workflow over the given subtitle files.
    pub async fn run(
        &self,
        input_files: &[PathBuf],
        colors: &[String],
        output: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<()> {
        if input_files.len() < 2 {
            return Err(anyhow!(
                "At least two subtitle files are required, got {}",
                input_files.len()
            ));
        }

        let mut tracks: Vec<LoadedTrack> = Vec::new();
        for (index, path) in input_files.iter().enumerate() {
            let color = colors
                .get(index)
                .cloned()
                .unwrap_or_else(|| self.config.palette_color(index));

            let track = self.load_track(path, index, &color)?;

            info!(
                "Loaded {} ({} captions{})",
                track.file_name,
                track.captions.len(),
                if track.color_tag.is_empty() {
                    String::new()
                } else {
                    format!(", color {}", track.color_tag)
                }
            );

            tracks.push(track);
        }

        if self.config.group_files && Self::should_group(&tracks) {
            self.deliver_grouped(&tracks, force_overwrite).await
        } else {
            self.deliver_single(&tracks, output, force_overwrite)
        }
    }

    /// Merge every loaded track into one output file.
    fn deliver_single(
        &self,
        tracks: &[LoadedTrack],
        output: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<()> {
        let picks: Vec<usize> = (0..tracks.len()).collect();
        let text = self.merge_to_text(tracks, &picks);

        let output_path = match output {
            Some(path) => path,
            None => self.group_output_path(tracks, &picks)?,
        };

        self.write_output(&output_path, &text, force_overwrite)
    }

    /// Merge each base-name group of 2+ tracks into its own output file,
    /// spacing the writes out by the configured stagger.
    async fn deliver_grouped(&self, tracks: &[LoadedTrack], force_overwrite: bool) -> Result<()> {
        let groups = Self::group_by_base_name(tracks);
        let eligible: Vec<(String, Vec<usize>)> = groups
            .into_iter()
            .filter(|(_, members)| members.len() >= 2)
            .collect();

        if eligible.is_empty() {
            warn!("No base-name group has two or more tracks, nothing to merge");
            return Ok(());
        }

        let progress_bar = ProgressBar::new(eligible.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} groups ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));

        for (index, (base, members)) in eligible.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.delivery_stagger_ms)).await;
            }

            progress_bar.set_message(base.clone());

            let text = self.merge_to_text(tracks, members);
            let output_path = self.group_output_path(tracks, members)?;

            self.write_output(&output_path, &text, force_overwrite)?;
            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("done");
        Ok(())
    }

    /// Output path for a group: the first member's directory and base name
    /// plus the configured suffix.
    fn group_output_path(&self, tracks: &[LoadedTrack], members: &[usize]) -> Result<PathBuf> {
        let first = members
            .first()
            .and_then(|&index| tracks.get(index))
            .ok_or_else(|| anyhow!("Cannot build an output path for an empty group"))?;

        Ok(FileManager::generate_output_path(
            Path::new(&first.file_name),
            &first.source_dir,
            &self.config.output_suffix,
        ))
    }

    fn write_output(&self, path: &Path, text: &str, force_overwrite: bool) -> Result<()> {
        if path.exists() && !force_overwrite {
            warn!(
                "Skipping {:?}, output already exists (use -f to force overwrite)",
                path
            );
            return Ok(());
        }

        FileManager::write_to_file(path, text)?;
        info!("Wrote {:?}", path);

        Ok(())
    }
}

/// Language name hinted by a file name's language-code suffix, if any.
fn track_language(file_name: &str) -> Option<&'static str> {
    let stem = file_name.strip_suffix(".srt").unwrap_or(file_name);
    let (_, last) = stem.rsplit_once('.')?;

    if language_utils::is_language_code(last) {
        language_utils::language_name(last)
    } else {
        None
    }
}
