//! Document discovery with gitignore support
//!
//! This module provides gitignore-aware file walking with glob-based filtering
//! and document kind detection using the ignore crate's TypesBuilder.

use crate::types::{GlobPattern, LanguageKind};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use ignore::types::{Types, TypesBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Detects tracked document kinds from file paths
///
/// Uses ripgrep's `markdown` and `txt` type definitions, so `.md`, `.markdown`,
/// `.mdx`, `.txt` and friends are recognized without a hand-kept list.
#[derive(Clone)]
pub struct LanguageDetector {
    matchers: Arc<Vec<(LanguageKind, Types)>>,
}

impl LanguageDetector {
    /// Creates a detector for every tracked kind
    ///
    /// A kind whose matcher fails to build is logged and skipped.
    pub fn new() -> Self {
        let mut matchers = Vec::new();

        for kind in LanguageKind::all() {
            let type_name = kind.ignore_type_name();
            let mut builder = TypesBuilder::new();
            builder.add_defaults();
            builder.select(type_name);

            match builder.build() {
                Ok(types) => matchers.push((kind, types)),
                Err(e) => {
                    warn!(type_name, error = %e, "failed to build document type matcher");
                }
            }
        }

        Self {
            matchers: Arc::new(matchers),
        }
    }

    /// Returns the kind of `path`, or None when the file is not tracked
    pub fn detect(&self, path: &Path) -> Option<LanguageKind> {
        self.matchers
            .iter()
            .find(|(_, types)| types.matched(path, false).is_whitelist())
            .map(|(kind, _)| *kind)
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LanguageDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageDetector")
            .field(
                "kinds",
                &self.matchers.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Reason why a file was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// File did not pass the include/exclude patterns
    ExcludedByPattern,
    /// File is neither markdown nor plain text
    Untracked,
    /// Entry is not a regular file
    NotAFile,
}

/// Result of file walking: a document to count or a skipped path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkResult {
    File(FileEntry),
    Skipped { path: PathBuf, reason: SkipReason },
}

/// A discovered document and its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub language: LanguageKind,
}

impl FileEntry {
    pub fn new(path: PathBuf, language: LanguageKind) -> Self {
        Self { path, language }
    }
}

/// Iterator source over discovered documents
pub struct FileWalker {
    root: PathBuf,
    walker: ignore::Walk,
    include_set: Option<GlobSet>,
    exclude_set: GlobSet,
    detector: LanguageDetector,
}

impl FileWalker {
    /// Creates a new FileWalker
    ///
    /// # Arguments
    /// * `root` - Directory (or single file) to walk
    /// * `include` - Include patterns (empty means include all)
    /// * `exclude` - Exclude patterns (applied after include)
    ///
    /// Patterns match paths relative to `root`, so `manuscript/**` works the
    /// same whether the walk starts at `.` or at an absolute directory.
    pub fn new(
        root: &Path,
        include: &[GlobPattern],
        exclude: &[GlobPattern],
    ) -> Result<Self, WalkError> {
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(true)
            .build();

        let include_set = if include.is_empty() {
            None
        } else {
            Some(build_globset(include)?)
        };

        // Always exclude .git directory, merging with user-provided excludes
        let mut exclude_patterns = Vec::from(exclude);
        exclude_patterns.push(GlobPattern::new("**/.git/**"));
        let exclude_set = build_globset(&exclude_patterns)?;

        Ok(Self {
            root: root.to_path_buf(),
            walker,
            include_set,
            exclude_set,
            detector: LanguageDetector::new(),
        })
    }

    /// Walks the tree and yields only documents to count
    pub fn walk(self) -> impl Iterator<Item = Result<FileEntry, WalkError>> {
        self.walk_with_skip_info().filter_map(|result| match result {
            Ok(WalkResult::File(file)) => Some(Ok(file)),
            Ok(WalkResult::Skipped { .. }) => None,
            Err(e) => Some(Err(e)),
        })
    }

    /// Walks the tree and yields every entry, skipped ones with a reason
    pub fn walk_with_skip_info(self) -> impl Iterator<Item = Result<WalkResult, WalkError>> {
        let include_set = self.include_set;
        let exclude_set = self.exclude_set;
        let detector = self.detector;
        let root = self.root;

        self.walker.map(move |result| -> Result<WalkResult, WalkError> {
            let entry = result?;
            let path = entry.path();

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return Ok(skipped(path, SkipReason::NotAFile));
            }

            let relative = relative_to_root(&root, path);

            if let Some(ref include_set) = include_set
                && !include_set.is_match(relative)
            {
                return Ok(skipped(path, SkipReason::ExcludedByPattern));
            }

            if exclude_set.is_match(relative) {
                return Ok(skipped(path, SkipReason::ExcludedByPattern));
            }

            Ok(match detector.detect(path) {
                Some(language) => WalkResult::File(FileEntry::new(path.to_path_buf(), language)),
                None => skipped(path, SkipReason::Untracked),
            })
        })
    }
}

/// `path` with the walk root stripped, or `path` itself when the root is the file
fn relative_to_root<'p>(root: &Path, path: &'p Path) -> &'p Path {
    match path.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative,
        _ => path,
    }
}

fn skipped(path: &Path, reason: SkipReason) -> WalkResult {
    WalkResult::Skipped {
        path: path.to_path_buf(),
        reason,
    }
}

/// Builds a GlobSet from patterns
pub(crate) fn build_globset(patterns: &[GlobPattern]) -> Result<GlobSet, WalkError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern.as_str()).map_err(|e| WalkError::InvalidGlob {
            pattern: pattern.as_str().to_string(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| WalkError::InvalidGlob {
        pattern: "<globset>".to_string(),
        source: e,
    })
}
