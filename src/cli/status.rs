//! Status command implementation
//!
//! Drives a [`StatusController`] for a single document read from a file or
//! standard input, then prints the label the controller would show. Nothing
//! is printed in human mode when the document is not tracked.

use crate::cli::args::{OutputFormat, RuleArgs};
use crate::cli::common::{self, EXIT_SUCCESS};
use crate::engine::file_walker::LanguageDetector;
use crate::error::MojicountError;
use crate::output::JsonlFormatter;
use crate::status::{Document, DocumentSource, LabelSlot, StatusController, StatusLabel};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Language id used when a file's kind cannot be detected
const UNKNOWN_LANGUAGE: &str = "unknown";

/// A document source holding one document loaded up front
#[derive(Debug, Clone, Default)]
pub struct LoadedDocument(Option<Document>);

impl LoadedDocument {
    pub fn new(document: Option<Document>) -> Self {
        Self(document)
    }

    /// Reads `path` (or stdin for `-`) and resolves its language id
    ///
    /// Without an explicit id, stdin is treated as plain text and files are
    /// classified by name.
    pub fn read(path: &Path, language: Option<&str>) -> io::Result<Self> {
        let (text, detected) = if path == Path::new("-") {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            (text, Some("plaintext"))
        } else {
            let text = fs::read_to_string(path)?;
            let detected = LanguageDetector::new().detect(path).map(|kind| kind.as_str());
            (text, detected)
        };

        let language_id = language.or(detected).unwrap_or(UNKNOWN_LANGUAGE);
        Ok(Self(Some(Document::new(language_id, text))))
    }
}

impl DocumentSource for LoadedDocument {
    fn active_document(&self) -> Option<Document> {
        self.0.clone()
    }
}

/// Computes the status label for one document
///
/// Returns None when the label would be hidden.
pub fn status_label(
    config_path: &Path,
    document: LoadedDocument,
    rules: &RuleArgs,
) -> Result<Option<StatusLabel>, MojicountError> {
    let config = common::load_config(config_path, rules)?;
    let style = config.output.label_style();
    let controller = StatusController::new(document, config, LabelSlot::new(), style);
    Ok(controller.into_sink().current().cloned())
}

/// Run the status command
pub fn run_status(
    config_path: &Path,
    file: &Path,
    language: Option<&str>,
    format: OutputFormat,
    rules: &RuleArgs,
) -> i32 {
    match run_status_inner(config_path, file, language, format, rules) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => common::report_error(&e),
    }
}

fn run_status_inner(
    config_path: &Path,
    file: &Path,
    language: Option<&str>,
    format: OutputFormat,
    rules: &RuleArgs,
) -> Result<(), MojicountError> {
    let document = LoadedDocument::read(file, language)?;
    let label = status_label(config_path, document, rules)?;

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Human => {
            if let Some(label) = label {
                writeln!(stdout, "{}", label)?;
            }
        }
        OutputFormat::Jsonl => {
            stdout.write_all(JsonlFormatter::new().format_status(label.as_ref()).as_bytes())?;
        }
    }
    Ok(())
}
