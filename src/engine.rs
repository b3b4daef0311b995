//! Counting engine: the core counter, document discovery and batch execution

pub mod counter;
pub mod executor;
pub mod file_walker;

pub use counter::{CharacterCounter, CountReport};
pub use executor::{DocumentCount, ExecutionEngine, ExecutionResult};
