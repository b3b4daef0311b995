//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading configuration,
//! discovering documents, picking colors and installing the log subscriber.

use crate::cli::args::{ColorChoice, OutputFormat, RuleArgs};
use crate::config::{ColorOption, Config, OutputFormat as ConfigOutputFormat};
use crate::engine::file_walker::{FileEntry, FileWalker, WalkError, WalkResult};
use crate::error::{ConfigError, MojicountError};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "MOJICOUNT_LOG";

/// Installs the stderr log subscriber
///
/// `MOJICOUNT_LOG` wins when set; otherwise `--verbose` selects debug and the
/// default is warnings only. Calling this twice is harmless.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "mojicount=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load configuration, then apply `--disable` overrides
///
/// A missing file yields the defaults.
pub(crate) fn load_config(path: &Path, rules: &RuleArgs) -> Result<Config, ConfigError> {
    let mut config = Config::load_or_default(path)?;
    config.disable_rules(&rules.disable);
    Ok(config)
}

/// Discover documents to count
///
/// Walks each path and collects the markdown and plain text files that pass
/// the include/exclude patterns from the configuration. Skipped paths are
/// logged at debug level.
pub(crate) fn discover_files(paths: &[PathBuf], config: &Config) -> Result<Vec<FileEntry>, WalkError> {
    let mut all_files = Vec::new();

    for path in paths {
        let walker = FileWalker::new(path, &config.mojicount.include, &config.mojicount.exclude)?;

        for result in walker.walk_with_skip_info() {
            match result? {
                WalkResult::File(file) => all_files.push(file),
                WalkResult::Skipped { path, reason } => {
                    debug!(path = %path.display(), ?reason, "skipped");
                }
            }
        }
    }

    Ok(all_files)
}

/// Resolves the output format: command line first, then configuration
pub(crate) fn output_format(cli: Option<OutputFormat>, config: &Config) -> OutputFormat {
    cli.unwrap_or(match config.output.format {
        ConfigOutputFormat::Human => OutputFormat::Human,
        ConfigOutputFormat::Jsonl => OutputFormat::Jsonl,
    })
}

/// Resolves the termcolor choice: command line first, then configuration
pub(crate) fn color_choice(cli: Option<ColorChoice>, config: &Config) -> termcolor::ColorChoice {
    let choice = cli.unwrap_or(match config.output.color {
        ColorOption::Auto => ColorChoice::Auto,
        ColorOption::Always => ColorChoice::Always,
        ColorOption::Never => ColorChoice::Never,
    });

    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}

/// Maps a command error to its exit code after printing it
pub(crate) fn report_error(e: &MojicountError) -> i32 {
    eprintln!("Error: {}", e);
    if e.is_config_parse() {
        EXIT_PARSE_ERROR
    } else {
        EXIT_ERROR
    }
}
