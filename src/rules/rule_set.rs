#![forbid(unsafe_code)]

//! Ordered set of exclusion rules
//!
//! The RuleSet is responsible for:
//! - Holding exactly one [`ExclusionRule`] per [`RuleName`], in application order
//! - Toggling rules on and off, one at a time or from a [`RuleToggles`] table
//! - Yielding the enabled rules for the counter

use crate::rules::ExclusionRule;
use crate::types::{RuleName, UnknownRuleName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-rule "disabled" flags, as supplied by configuration
///
/// Rules that are absent from the table are enabled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, bool>",
    into = "BTreeMap<String, bool>"
)]
pub struct RuleToggles(BTreeMap<RuleName, bool>);

impl TryFrom<BTreeMap<String, bool>> for RuleToggles {
    type Error = UnknownRuleName;

    fn try_from(value: BTreeMap<String, bool>) -> Result<Self, Self::Error> {
        value
            .into_iter()
            .map(|(name, disabled)| name.parse::<RuleName>().map(|name| (name, disabled)))
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(RuleToggles)
    }
}

impl From<RuleToggles> for BTreeMap<String, bool> {
    fn from(toggles: RuleToggles) -> Self {
        toggles
            .0
            .into_iter()
            .map(|(name, disabled)| (name.as_str().to_string(), disabled))
            .collect()
    }
}

impl RuleToggles {
    /// Creates an empty table (every rule enabled)
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` is marked disabled
    pub fn is_disabled(&self, name: RuleName) -> bool {
        self.0.get(&name).copied().unwrap_or(false)
    }

    /// Marks `name` as disabled or not
    pub fn set_disabled(&mut self, name: RuleName, disabled: bool) {
        self.0.insert(name, disabled);
    }

    /// Names explicitly marked disabled, in application order
    pub fn disabled(&self) -> impl Iterator<Item = RuleName> + '_ {
        self.0
            .iter()
            .filter(|&(_, &disabled)| disabled)
            .map(|(&name, _)| name)
    }
}

impl FromIterator<RuleName> for RuleToggles {
    /// Builds a table disabling every listed rule
    fn from_iter<I: IntoIterator<Item = RuleName>>(iter: I) -> Self {
        RuleToggles(iter.into_iter().map(|name| (name, true)).collect())
    }
}

/// The complete, ordered set of exclusion rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ExclusionRule>,
}

impl RuleSet {
    /// Creates the rule set with every rule enabled
    pub fn new() -> Self {
        Self {
            rules: RuleName::ALL.into_iter().map(ExclusionRule::new).collect(),
        }
    }

    /// Returns the rule for `name`
    pub fn get(&self, name: RuleName) -> &ExclusionRule {
        &self.rules[name.position()]
    }

    pub fn is_enabled(&self, name: RuleName) -> bool {
        self.get(name).is_enabled()
    }

    /// Enables or disables one rule
    pub fn set_enabled(&mut self, name: RuleName, enabled: bool) {
        let rule = &mut self.rules[name.position()];
        debug_assert_eq!(rule.name(), name, "rule set out of order");
        rule.set_enabled(enabled);
    }

    /// Sets every rule's flag from `toggles`
    ///
    /// Returns the names whose state changed.
    pub fn apply(&mut self, toggles: &RuleToggles) -> Vec<RuleName> {
        let mut changed = Vec::new();
        for rule in &mut self.rules {
            let enabled = !toggles.is_disabled(rule.name());
            if rule.is_enabled() != enabled {
                rule.set_enabled(enabled);
                changed.push(rule.name());
            }
        }
        changed
    }

    /// All rules in application order
    pub fn iter(&self) -> impl Iterator<Item = &ExclusionRule> {
        self.rules.iter()
    }

    /// Enabled rules in application order
    pub fn enabled(&self) -> impl Iterator<Item = &ExclusionRule> {
        self.rules.iter().filter(|rule| rule.is_enabled())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&RuleToggles> for RuleSet {
    fn from(toggles: &RuleToggles) -> Self {
        let mut set = RuleSet::new();
        set.apply(toggles);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_one_enabled_rule_per_name_in_order() {
        let set = RuleSet::new();
        assert_eq!(set.len(), RuleName::ALL.len());
        let names: Vec<_> = set.iter().map(|r| r.name()).collect();
        assert_eq!(names, RuleName::ALL.to_vec());
        assert!(set.iter().all(|r| r.is_enabled()));
    }

    #[test]
    fn test_set_enabled_toggles_only_that_rule() {
        let mut set = RuleSet::new();
        set.set_enabled(RuleName::HtmlRuby, false);
        assert!(!set.is_enabled(RuleName::HtmlRuby));
        assert_eq!(set.enabled().count(), 6);

        set.set_enabled(RuleName::HtmlRuby, true);
        assert!(set.is_enabled(RuleName::HtmlRuby));
    }

    #[test]
    fn test_enabled_preserves_order_when_middle_rule_disabled() {
        let mut set = RuleSet::new();
        set.set_enabled(RuleName::Whitespace, false);
        let names: Vec<_> = set.enabled().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                RuleName::Heading,
                RuleName::HtmlComment,
                RuleName::AozoraRuby,
                RuleName::HtmlRuby,
                RuleName::VerticalBarRuby,
                RuleName::AsciiCharacters,
            ]
        );
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut set = RuleSet::new();
        let toggles: RuleToggles = [RuleName::AsciiCharacters, RuleName::Heading]
            .into_iter()
            .collect();

        let changed = set.apply(&toggles);
        assert_eq!(changed, vec![RuleName::Heading, RuleName::AsciiCharacters]);
        assert!(!set.is_enabled(RuleName::Heading));

        // Re-applying the same table is a no-op
        assert!(set.apply(&toggles).is_empty());

        // Applying an empty table re-enables everything
        let changed = set.apply(&RuleToggles::new());
        assert_eq!(changed.len(), 2);
        assert!(set.iter().all(|r| r.is_enabled()));
    }

    #[test]
    fn test_toggles_deserialize_rejects_unknown_names() {
        let ok: RuleToggles = serde_json::from_str(r#"{"htmlRuby": true}"#).unwrap();
        assert!(ok.is_disabled(RuleName::HtmlRuby));

        let err = serde_json::from_str::<RuleToggles>(r#"{"html_ruby": true}"#).unwrap_err();
        assert!(err.to_string().contains("unknown rule name 'html_ruby'"));
    }

    #[test]
    fn test_toggles_false_entry_means_enabled() {
        let mut toggles = RuleToggles::new();
        toggles.set_disabled(RuleName::Whitespace, false);
        assert!(!toggles.is_disabled(RuleName::Whitespace));
        assert_eq!(toggles.disabled().count(), 0);

        let set = RuleSet::from(&toggles);
        assert!(set.is_enabled(RuleName::Whitespace));
    }
}
