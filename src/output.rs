//! Output formatters
//!
//! Count results, rule listings and status labels render either as colored
//! text for people or as JSON Lines for scripts.

mod human;
mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
