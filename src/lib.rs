#![forbid(unsafe_code)]

//! mojicount: visible character counts for Japanese prose
//!
//! Counts the characters of a markdown or plain text document that a writer
//! would consider part of the prose. Heading lines, whitespace, HTML comments,
//! ruby (furigana) readings and markers, and optionally ASCII characters are
//! excluded by a fixed, ordered set of rules that can be switched off one by one.
//!
//! ```
//! use mojicount::{CharacterCounter, RuleName};
//!
//! let mut counter = CharacterCounter::new();
//! assert_eq!(counter.count("# 第一章\n｜吾輩《わがはい》は猫である。"), 8);
//!
//! counter.set_enabled(RuleName::AsciiCharacters, false);
//! assert_eq!(counter.count("Hello 世界"), 7);
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod status;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, MojicountError};

// Re-export core domain types for convenient access
pub use engine::{CharacterCounter, CountReport};
pub use rules::{ExclusionRule, RuleSet, RuleToggles};
pub use types::{GlobPattern, LanguageKind, RuleName};
