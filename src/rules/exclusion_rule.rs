#![forbid(unsafe_code)]

//! A single named exclusion rule
//!
//! Each rule pairs a [`RuleName`] with a compiled regular expression whose
//! matches are deleted from the working text. Patterns are fixed per name and
//! compiled once per process.

use crate::types::RuleName;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Pattern sources, indexed by [`RuleName::position`]
///
/// - heading: a line starts after `\n`, `\r`, U+2028 or U+2029, and the
///   heading runs up to the next of those. A separator in front of the
///   heading goes with it; the whitespace rule would delete it anyway.
/// - whitespace: Unicode White_Space plus the byte order mark
/// - delimited spans: `(?s)` so the lazy body may cross newlines
const PATTERNS: [&str; 7] = [
    r"(?mR)(?:^|[\x{2028}\x{2029}])\s*#[^\r\n\x{2028}\x{2029}]*",
    r"[\s\x{FEFF}]",
    r"(?s)<!--.*?-->",
    r"(?s)《.*?》",
    r"(?s)<rt>.*?</rt>",
    r"[|｜]",
    r"[\x00-\x7F]",
];

static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .map(|source| Regex::new(source).expect("built-in exclusion pattern must compile"))
        .collect()
});

/// A rule that deletes every match of its pattern when enabled
#[derive(Clone)]
pub struct ExclusionRule {
    name: RuleName,
    pattern: Regex,
    enabled: bool,
}

impl std::fmt::Debug for ExclusionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExclusionRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl ExclusionRule {
    /// Creates the enabled rule for `name`
    pub fn new(name: RuleName) -> Self {
        Self {
            name,
            pattern: COMPILED[name.position()].clone(),
            enabled: true,
        }
    }

    pub fn name(&self) -> RuleName {
        self.name
    }

    /// Source text of the compiled pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Human-readable summary of what the rule removes
    pub fn description(&self) -> &'static str {
        match self.name {
            RuleName::Heading => "Markdown heading lines starting with '#'",
            RuleName::Whitespace => "All whitespace, including newlines and full-width spaces",
            RuleName::HtmlComment => "HTML comments <!-- ... -->",
            RuleName::AozoraRuby => "Aozora-style ruby readings 《...》",
            RuleName::HtmlRuby => "HTML ruby readings <rt>...</rt>",
            RuleName::VerticalBarRuby => "Ruby start markers | and ｜",
            RuleName::AsciiCharacters => "Half-width ASCII characters",
        }
    }

    /// Deletes every non-overlapping match from `text`
    ///
    /// Ignores the enabled flag; callers decide whether the rule runs.
    /// Borrows the input when nothing matched.
    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, "")
    }
}
