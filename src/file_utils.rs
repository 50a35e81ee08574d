use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::language_utils;

// @module: File and directory utilities

// @const: loose SRT shape used for content sniffing
static SRT_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\s*\r?\n\d{2}:\d{2}:\d{2},\d{3}\s+-->\s+\d{2}:\d{2}:\d{2},\d{3}").unwrap()
});

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Find subtitle files in a directory, sorted by path
    pub fn find_subtitle_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case("srt") {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// Check whether a file looks like a SubRip subtitle file.
    ///
    /// The extension decides when present; otherwise the contents are
    /// sniffed for an index line followed by a timestamp range.
    pub fn is_subtitle_file<P: AsRef<Path>>(path: P) -> bool {
        let path = path.as_ref();

        if !Self::file_exists(path) {
            return false;
        }

        if let Some(ext) = path.extension() {
            return ext.to_string_lossy().eq_ignore_ascii_case("srt");
        }

        if let Ok(content) = fs::read_to_string(path) {
            if content.contains("-->") {
                return SRT_SHAPE_REGEX.is_match(&content);
            }
        }

        false
    }

    // @generates: Output path for a merged subtitle
    // @params: input_file, output_dir, suffix
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        suffix: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        let file_name = input_file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let mut output_filename = base_file_name(&file_name);
        output_filename.push_str(suffix);

        output_dir.join(output_filename)
    }
}

/// Strip the `.srt` extension and any trailing language-code suffix from a
/// subtitle file name.
///
/// At most two dot-separated language codes are removed (`movie.zh.en.srt`
/// becomes `movie`); components that are not ISO 639 codes stay put, so
/// `movie.final.srt` keeps its suffix.
pub fn base_file_name(filename: &str) -> String {
    let stem = filename.strip_suffix(".srt").unwrap_or(filename);

    let mut base = stem;
    for _ in 0..2 {
        match base.rsplit_once('.') {
            Some((rest, last)) if language_utils::is_language_code(last) => base = rest,
            _ => break,
        }
    }

    base.to_string()
}
