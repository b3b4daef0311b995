#![forbid(unsafe_code)]

//! Parallel execution engine for counting many documents
//!
//! This module provides the ExecutionEngine, which reads discovered documents
//! and counts them in parallel using rayon. One counter is shared by reference
//! across worker threads; counting never mutates it.

use crate::engine::counter::{CharacterCounter, CountReport};
use crate::engine::file_walker::FileEntry;
use crate::types::LanguageKind;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Count for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCount {
    pub path: PathBuf,
    pub language: LanguageKind,
    pub report: CountReport,
}

/// Result of counting all documents
#[derive(Debug, Default)]
pub struct ExecutionResult {
    /// Per-document counts, sorted by path
    pub documents: Vec<DocumentCount>,
    /// Documents that could not be read
    pub unreadable: Vec<PathBuf>,
}

impl ExecutionResult {
    /// Sum of all document counts
    pub fn total(&self) -> usize {
        self.documents.iter().map(|doc| doc.report.count).sum()
    }
}

/// Counts documents in parallel with a shared counter
pub struct ExecutionEngine {
    counter: CharacterCounter,
}

impl ExecutionEngine {
    pub fn new(counter: CharacterCounter) -> Self {
        Self { counter }
    }

    pub fn counter(&self) -> &CharacterCounter {
        &self.counter
    }

    /// Reads and counts every file
    ///
    /// Unreadable files (missing, permission denied, not UTF-8) are logged and
    /// listed in [`ExecutionResult::unreadable`] instead of failing the run.
    pub fn execute(&self, files: Vec<FileEntry>) -> ExecutionResult {
        let outcomes: Vec<Result<DocumentCount, PathBuf>> =
            files.into_par_iter().map(|file| self.execute_file(file)).collect();

        let mut result = ExecutionResult::default();
        for outcome in outcomes {
            match outcome {
                Ok(doc) => result.documents.push(doc),
                Err(path) => result.unreadable.push(path),
            }
        }

        result.documents.sort_by(|a, b| a.path.cmp(&b.path));
        result.unreadable.sort();
        debug!(
            documents = result.documents.len(),
            unreadable = result.unreadable.len(),
            total = result.total(),
            "counted documents"
        );
        result
    }

    fn execute_file(&self, file: FileEntry) -> Result<DocumentCount, PathBuf> {
        match fs::read_to_string(&file.path) {
            Ok(content) => Ok(DocumentCount {
                report: self.counter.count_detailed(&content),
                path: file.path,
                language: file.language,
            }),
            Err(e) => {
                warn!(path = %file.path.display(), error = %e, "failed to read document");
                Err(file.path)
            }
        }
    }
}
