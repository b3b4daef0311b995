//! Rules command implementation
//!
//! Lists every exclusion rule in application order with its enabled state
//! after configuration and `--disable` overrides.

use crate::cli::args::{ColorChoice, OutputFormat, RuleArgs};
use crate::cli::common::{self, EXIT_SUCCESS};
use crate::engine::CharacterCounter;
use crate::error::MojicountError;
use crate::output::{HumanFormatter, JsonlFormatter};
use std::io::Write;
use std::path::Path;
use termcolor::StandardStream;

/// Builds the counter the other commands would use, for inspection
pub fn configured_counter(
    config_path: &Path,
    rules: &RuleArgs,
) -> Result<CharacterCounter, MojicountError> {
    let config = common::load_config(config_path, rules)?;
    Ok(CharacterCounter::with_toggles(&config.disabled))
}

/// Run the rules command
pub fn run_rules(
    config_path: &Path,
    format: OutputFormat,
    color: Option<ColorChoice>,
    rules: &RuleArgs,
    verbose: bool,
) -> i32 {
    match run_rules_inner(config_path, format, color, rules, verbose) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => common::report_error(&e),
    }
}

fn run_rules_inner(
    config_path: &Path,
    format: OutputFormat,
    color: Option<ColorChoice>,
    rules: &RuleArgs,
    verbose: bool,
) -> Result<(), MojicountError> {
    let config = common::load_config(config_path, rules)?;
    let counter = CharacterCounter::with_toggles(&config.disabled);

    match format {
        OutputFormat::Human => {
            let formatter = HumanFormatter::new(config.output.label_style(), verbose);
            let mut stdout = StandardStream::stdout(common::color_choice(color, &config));
            formatter.write_rules(&mut stdout, counter.rules())?;
        }
        OutputFormat::Jsonl => {
            let output = JsonlFormatter::new().format_rules(counter.rules());
            std::io::stdout().lock().write_all(output.as_bytes())?;
        }
    }
    Ok(())
}
