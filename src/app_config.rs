use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Color tags assigned to tracks by position when no explicit color is
    /// given; an empty tag leaves that track uncolored. Wraps around when
    /// more tracks are loaded than the palette has entries.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Suffix appended to the base name of merged output files
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Merge inputs per base-name group when they form more than one group
    #[serde(default = "default_group_files")]
    pub group_files: bool,

    /// Milliseconds to wait between writing grouped output files
    #[serde(default = "default_delivery_stagger_ms")]
    pub delivery_stagger_ms: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_palette() -> Vec<String> {
    // The first track keeps the player's default subtitle color
    vec![
        String::new(),
        "yellow".to_string(),
        "cyan".to_string(),
        "lime".to_string(),
        "violet".to_string(),
    ]
}

fn default_output_suffix() -> String {
    ".merged.srt".to_string()
}

fn default_group_files() -> bool {
    true
}

fn default_delivery_stagger_ms() -> u64 {
    100
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(anyhow!("Color palette must not be empty"));
        }

        if !self.output_suffix.ends_with(".srt") {
            return Err(anyhow!(
                "Output suffix must end with .srt, got: {}",
                self.output_suffix
            ));
        }

        Ok(())
    }

    /// Color tag for the track at the given load position
    pub fn palette_color(&self, index: usize) -> String {
        if self.palette.is_empty() {
            String::new()
        } else {
            self.palette[index % self.palette.len()].clone()
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            palette: default_palette(),
            output_suffix: default_output_suffix(),
            group_files: default_group_files(),
            delivery_stagger_ms: default_delivery_stagger_ms(),
            log_level: LogLevel::default(),
        }
    }
}
