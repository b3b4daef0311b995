#![forbid(unsafe_code)]

//! Visible character counting
//!
//! The counter applies the enabled exclusion rules in their fixed order, each
//! one deleting its matches from the output of the previous rule, and counts
//! the Unicode scalar values that remain.
//!
//! Delimited rules use nearest-closing-delimiter semantics. Nested spans are
//! not balanced: `《あ《い》う》` leaves `う》` behind.

use crate::rules::{ExclusionRule, RuleSet, RuleToggles};
use crate::types::RuleName;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Per-rule breakdown of a single count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountReport {
    /// Characters that remain after every enabled rule ran
    pub count: usize,
    /// Characters in the input
    pub original_chars: usize,
    /// Characters each enabled rule deleted, in application order
    pub removed: BTreeMap<RuleName, usize>,
}

/// Counts the characters of a document that a writer would consider prose
#[derive(Debug, Clone, Default)]
pub struct CharacterCounter {
    rules: RuleSet,
}

impl CharacterCounter {
    /// Creates a counter with every rule enabled
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new(),
        }
    }

    /// Creates a counter with the rules in `toggles` disabled
    pub fn with_toggles(toggles: &RuleToggles) -> Self {
        Self {
            rules: RuleSet::from(toggles),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn is_enabled(&self, name: RuleName) -> bool {
        self.rules.is_enabled(name)
    }

    /// Enables or disables one rule
    pub fn set_enabled(&mut self, name: RuleName, enabled: bool) {
        self.rules.set_enabled(name, enabled);
    }

    /// Replaces every rule's flag from `toggles`, returning the rules that changed
    pub fn apply_toggles(&mut self, toggles: &RuleToggles) -> Vec<RuleName> {
        self.rules.apply(toggles)
    }

    /// Returns the text left after every enabled rule ran
    pub fn filter<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.rules
            .enabled()
            .fold(Cow::Borrowed(text), |working, rule| strip_into(rule, working))
    }

    /// Number of characters that count toward the visible length of `text`
    pub fn count(&self, text: &str) -> usize {
        self.filter(text).chars().count()
    }

    /// Counts `text` and records how many characters each enabled rule deleted
    pub fn count_detailed(&self, text: &str) -> CountReport {
        let original_chars = text.chars().count();
        let mut removed = BTreeMap::new();
        let mut working = Cow::Borrowed(text);
        let mut remaining = original_chars;

        for rule in self.rules.enabled() {
            working = strip_into(rule, working);
            let after = working.chars().count();
            removed.insert(rule.name(), remaining - after);
            remaining = after;
        }

        CountReport {
            count: remaining,
            original_chars,
            removed,
        }
    }
}

/// Applies `rule` to `working`, keeping the existing buffer when nothing matched
fn strip_into<'t>(rule: &ExclusionRule, working: Cow<'t, str>) -> Cow<'t, str> {
    let stripped = match rule.strip(&working) {
        Cow::Borrowed(_) => None,
        Cow::Owned(s) => Some(s),
    };
    match stripped {
        Some(s) => Cow::Owned(s),
        None => working,
    }
}
