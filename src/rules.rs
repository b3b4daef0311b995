#![forbid(unsafe_code)]

//! Exclusion rules and the ordered rule set

mod exclusion_rule;
mod rule_set;

// Re-export core types
pub use exclusion_rule::ExclusionRule;
pub use rule_set::{RuleSet, RuleToggles};
