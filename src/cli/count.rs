//! Count command implementation
//!
//! This module implements the `mojicount count` command, which:
//! - Loads configuration from mojicount.toml (defaults when absent)
//! - Discovers markdown and plain text documents
//! - Counts them in parallel
//! - Formats output (human or JSONL)

use crate::cli::args::{ColorChoice, OutputFormat, RuleArgs};
use crate::cli::common::{self, EXIT_SUCCESS};
use crate::engine::{CharacterCounter, ExecutionEngine, ExecutionResult};
use crate::error::MojicountError;
use crate::output::{HumanFormatter, JsonlFormatter};
use std::io::Write;
use std::path::{Path, PathBuf};
use termcolor::StandardStream;
use tracing::{debug, warn};

/// Options for the count command
#[derive(Debug, Clone)]
pub struct CountOptions<'a> {
    pub config_path: &'a Path,
    pub paths: &'a [PathBuf],
    pub format: Option<OutputFormat>,
    pub color: Option<ColorChoice>,
    pub rules: &'a RuleArgs,
    pub verbose: bool,
}

/// Run the count command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error (I/O, file walking)
/// - 3: Invalid configuration
pub fn run_count(options: &CountOptions<'_>) -> i32 {
    match run_count_inner(options) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => common::report_error(&e),
    }
}

/// Count documents without printing anything
///
/// This is the library entry point behind `mojicount count`.
pub fn count_paths(
    config_path: &Path,
    paths: &[PathBuf],
    rules: &RuleArgs,
) -> Result<ExecutionResult, MojicountError> {
    let config = common::load_config(config_path, rules)?;
    count_with_config(&config, paths)
}

fn count_with_config(
    config: &crate::config::Config,
    paths: &[PathBuf],
) -> Result<ExecutionResult, MojicountError> {
    let files = common::discover_files(paths, config)?;
    if files.is_empty() {
        warn!("no markdown or plain text documents found");
    }

    let engine = ExecutionEngine::new(CharacterCounter::with_toggles(&config.disabled));
    debug!(
        files = files.len(),
        enabled_rules = engine.counter().rules().enabled().count(),
        "counting documents"
    );
    Ok(engine.execute(files))
}

fn run_count_inner(options: &CountOptions<'_>) -> Result<ExecutionResult, MojicountError> {
    let config = common::load_config(options.config_path, options.rules)?;
    let result = count_with_config(&config, options.paths)?;

    match common::output_format(options.format, &config) {
        OutputFormat::Human => {
            let formatter = HumanFormatter::new(config.output.label_style(), options.verbose);
            let mut stdout = StandardStream::stdout(common::color_choice(options.color, &config));
            formatter.write_counts(&mut stdout, &result)?;
        }
        OutputFormat::Jsonl => {
            let output = JsonlFormatter::new().format_counts(&result);
            std::io::stdout().lock().write_all(output.as_bytes())?;
        }
    }

    Ok(result)
}
