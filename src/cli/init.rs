//! Initialize a mojicount project
//!
//! Writes a commented default configuration file.

use std::fs;
use std::path::Path;

/// Default content for mojicount.toml
pub const DEFAULT_MOJICOUNT_TOML: &str = r##"[mojicount]
version = "1"

# Documents to count (markdown and plain text files only)
# include = ["manuscript/**"]

# Documents to leave out
# exclude = ["**/drafts/**"]

[disabled]
# Every rule is enabled by default. Set a rule to true to stop applying it.
# heading = false          # "# ..." heading lines
# whitespace = false       # spaces, tabs, newlines, full-width spaces
# htmlComment = false      # <!-- ... -->
# aozoraRuby = false       # 《...》 readings
# htmlRuby = false         # <rt>...</rt> readings
# verticalBarRuby = false  # | and ｜ ruby markers
# asciiCharacters = false  # half-width letters, digits and symbols

[output]
format = "human"
# icon = "$(pencil)"
# unit = "文字"
"##;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path error
    #[error("Path error: {0}")]
    Path(String),
}

/// What init did with the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Skipped,
    Overwritten,
}

/// Run the init command
///
/// # Arguments
/// * `path` - Where to write the configuration
/// * `force` - If true, overwrite an existing file. If false, leave it alone.
pub fn run_init(path: &Path, force: bool) -> Result<InitOutcome, InitError> {
    if path.is_dir() {
        return Err(InitError::Path(format!(
            "Path '{}' exists but is a directory",
            path.display()
        )));
    }

    let outcome = match (path.exists(), force) {
        (true, false) => return Ok(InitOutcome::Skipped),
        (true, true) => InitOutcome::Overwritten,
        (false, _) => InitOutcome::Created,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_MOJICOUNT_TOML)?;
    Ok(outcome)
}
