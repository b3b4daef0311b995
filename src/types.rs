#![forbid(unsafe_code)]

//! Core domain types for mojicount
//!
//! This module defines the closed set of exclusion rule names, the document
//! kinds that are counted, and the glob wrapper used by configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of one exclusion rule
///
/// The set is closed: every rule the counter knows about is listed here, in
/// the order the rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleName {
    /// Markdown ATX heading lines
    Heading,
    /// Every whitespace character
    Whitespace,
    /// `<!-- ... -->` spans
    HtmlComment,
    /// `《...》` ruby readings
    AozoraRuby,
    /// `<rt>...</rt>` ruby readings
    HtmlRuby,
    /// `|` and `｜` ruby start markers
    VerticalBarRuby,
    /// Every ASCII character
    AsciiCharacters,
}

impl RuleName {
    /// All rule names, in application order
    pub const ALL: [RuleName; 7] = [
        RuleName::Heading,
        RuleName::Whitespace,
        RuleName::HtmlComment,
        RuleName::AozoraRuby,
        RuleName::HtmlRuby,
        RuleName::VerticalBarRuby,
        RuleName::AsciiCharacters,
    ];

    /// Returns the name as used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::Heading => "heading",
            RuleName::Whitespace => "whitespace",
            RuleName::HtmlComment => "htmlComment",
            RuleName::AozoraRuby => "aozoraRuby",
            RuleName::HtmlRuby => "htmlRuby",
            RuleName::VerticalBarRuby => "verticalBarRuby",
            RuleName::AsciiCharacters => "asciiCharacters",
        }
    }

    /// Position of this rule in the application order
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule name '{0}' (expected one of: heading, whitespace, htmlComment, aozoraRuby, htmlRuby, verticalBarRuby, asciiCharacters)")]
pub struct UnknownRuleName(pub String);

impl FromStr for RuleName {
    type Err = UnknownRuleName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownRuleName(s.to_string()))
    }
}

/// Document kinds whose characters are counted
///
/// Anything else is untracked and never reaches the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKind {
    Markdown,
    Plaintext,
}

impl LanguageKind {
    /// All tracked kinds
    pub fn all() -> [LanguageKind; 2] {
        [LanguageKind::Markdown, LanguageKind::Plaintext]
    }

    /// Maps a host language identifier to a tracked kind
    ///
    /// Returns None for identifiers that are not counted.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "markdown" => Some(LanguageKind::Markdown),
            "plaintext" => Some(LanguageKind::Plaintext),
            _ => None,
        }
    }

    /// Returns the host language identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageKind::Markdown => "markdown",
            LanguageKind::Plaintext => "plaintext",
        }
    }

    /// Name of the matching file type in the `ignore` crate's defaults
    pub fn ignore_type_name(&self) -> &'static str {
        match self {
            LanguageKind::Markdown => "markdown",
            LanguageKind::Plaintext => "txt",
        }
    }
}

impl fmt::Display for LanguageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A glob pattern for file matching
///
/// This is a simple wrapper around a string that will be used with the `globset` crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobPattern(String);

impl GlobPattern {
    /// Creates a new GlobPattern
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    /// Returns the pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        GlobPattern(pattern.to_string())
    }
}
