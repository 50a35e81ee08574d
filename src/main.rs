// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;
use file_utils::FileManager;

mod app_config;
mod app_controller;
mod caption_parser;
mod caption_serializer;
mod errors;
mod file_utils;
mod language_utils;
mod time_code;
mod timeline_merger;
mod validation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge subtitle tracks into one attributed track (default command)
    #[command(alias = "merge")]
    Merge(MergeArgs),

    /// Generate shell completions for srtmerge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct MergeArgs {
    /// Subtitle files to merge, or a directory to scan for them
    #[arg(value_name = "INPUT_PATH", required = true)]
    input_paths: Vec<PathBuf>,

    /// Color tag for the matching input file, by position (repeatable)
    #[arg(short, long, action = clap::ArgAction::Append)]
    color: Vec<String>,

    /// Output file for the merged track (single-output mode only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Merge all inputs into one output instead of grouping by base name
    #[arg(long)]
    no_group: bool,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(long, default_value = "srtmerge.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// srtmerge - SubRip subtitle track merger
///
/// Combines two or more independently timed subtitle tracks into one track
/// whose overlapping captions are split into non-overlapping segments, each
/// line attributed to its source track by color.
#[derive(Parser, Debug)]
#[command(name = "srtmerge")]
#[command(author = "srtmerge contributors")]
#[command(version = "1.0.0")]
#[command(about = "Merge SubRip subtitle tracks with per-source colors")]
#[command(long_about = "srtmerge combines independently timed SubRip tracks into one track.
Overlapping captions are split at every timing boundary and the text of each
source is kept on its own line, optionally wrapped in a color marker.

EXAMPLES:
    srtmerge movie.en.srt movie.fr.srt          # Merge two tracks
    srtmerge -c '' -c yellow a.srt b.srt        # First track uncolored, second yellow
    srtmerge -o both.srt a.srt b.srt            # Choose the output file
    srtmerge /media/subs/                       # Scan a directory, group by base name
    srtmerge --no-group s1.en.srt s1.fr.srt s2.en.srt s2.fr.srt
    srtmerge completions bash > srtmerge.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in srtmerge.json by default. You can specify a
    different file with --config-path. If the config file doesn't exist, a
    default one will be created automatically.

GROUPING:
    With more than two inputs, files sharing a base name (after stripping a
    trailing language-code suffix such as .en or .eng) are merged per group,
    each group to <base>.merged.srt next to its sources.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Subtitle files to merge, or a directory to scan for them
    #[arg(value_name = "INPUT_PATH")]
    input_paths: Vec<PathBuf>,

    /// Color tag for the matching input file, by position (repeatable)
    #[arg(short, long, action = clap::ArgAction::Append)]
    color: Vec<String>,

    /// Output file for the merged track (single-output mode only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Merge all inputs into one output instead of grouping by base name
    #[arg(long)]
    no_group: bool,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(long, default_value = "srtmerge.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                emoji,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "srtmerge", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Merge(args)) => run_merge(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            if cli.input_paths.is_empty() {
                return Err(anyhow!(
                    "INPUT_PATH is required when no subcommand is specified"
                ));
            }

            let merge_args = MergeArgs {
                input_paths: cli.input_paths,
                color: cli.color,
                output: cli.output,
                no_group: cli.no_group,
                force_overwrite: cli.force_overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_merge(merge_args).await
        }
    }
}

async fn run_merge(options: MergeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if options.no_group {
        config.group_files = false;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    // Expand directory inputs into the subtitle files they contain
    let mut input_files: Vec<PathBuf> = Vec::new();
    for path in &options.input_paths {
        if path.is_dir() {
            input_files.extend(FileManager::find_subtitle_files(path)?);
        } else if FileManager::is_subtitle_file(path) {
            input_files.push(path.clone());
        } else if path.exists() {
            warn!("Skipping {:?}, not a subtitle file", path);
        } else {
            return Err(anyhow!("Input path does not exist: {:?}", path));
        }
    }

    controller
        .run(
            &input_files,
            &options.color,
            options.output,
            options.force_overwrite,
        )
        .await
}
