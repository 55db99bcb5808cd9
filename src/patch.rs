//! Literal text patches.
//!
//! A [`TextPatch`] pairs an exact search block with its replacement. Location is a plain
//! substring search: the search block is full of `(`, `[`, `{` and `!` and none of them
//! mean anything here.

use crate::edit::{self, Edit, EditError};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// A fixed search/replace pair bound to one workspace-relative file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPatch {
    pub id: &'static str,
    /// Target file, relative to the workspace root
    pub target: &'static str,
    pub search: &'static str,
    pub replacement: &'static str,
    /// One-line description of the effect, shown after a successful write
    pub headline: &'static str,
    /// Bullet lines describing the behavioural change
    pub summary: &'static [&'static str],
}

/// Outcome of running a patch against a file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "PatchOutcome should be checked for applied/no-op"]
pub enum PatchOutcome {
    /// Every occurrence of the search block was replaced and the file written
    Applied {
        file: PathBuf,
        occurrences: usize,
        original: String,
        patched: String,
    },
    /// Search block absent, replacement already present
    AlreadyApplied { file: PathBuf },
    /// Neither block present
    NoMatch { file: PathBuf },
}

impl PatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, PatchOutcome::Applied { .. })
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::Applied {
                file, occurrences, ..
            } => write!(
                f,
                "Applied patch to {} ({} occurrence(s))",
                file.display(),
                occurrences
            ),
            PatchOutcome::AlreadyApplied { file } => {
                write!(f, "Already applied to {}", file.display())
            }
            PatchOutcome::NoMatch { file } => {
                write!(f, "Search block not found in {}", file.display())
            }
        }
    }
}

/// Errors that abort a patch run. A missing search block is not one of them.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: EditError,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: EditError,
    },
}

impl TextPatch {
    /// Byte offsets of every non-overlapping occurrence of the search block.
    pub fn locate(&self, content: &str) -> Vec<usize> {
        content
            .match_indices(self.search)
            .map(|(start, _)| start)
            .collect()
    }

    /// One edit per occurrence of the search block.
    pub fn compute_edits(&self, content: &str) -> Vec<Edit> {
        self.locate(content)
            .into_iter()
            .map(|byte_start| {
                debug!(patch = self.id, byte_start, "located search block");
                Edit::new(
                    byte_start,
                    byte_start + self.search.len(),
                    self.replacement,
                    self.search,
                )
            })
            .collect()
    }

    /// In-memory substitution. Returns `None` when nothing would change.
    pub fn apply_to_str(&self, content: &str) -> Result<Option<String>, EditError> {
        let edits = self.compute_edits(content);
        if edits.is_empty() {
            return Ok(None);
        }
        Edit::splice_all(content, edits).map(Some)
    }

    /// Patch `target` under `workspace_root`, writing it back if it matched.
    pub fn apply(&self, workspace_root: impl AsRef<Path>) -> Result<PatchOutcome, PatchError> {
        self.apply_to_file(&workspace_root.as_ref().join(self.target))
    }

    /// One read, one in-memory substitution, at most one write.
    pub fn apply_to_file(&self, file: &Path) -> Result<PatchOutcome, PatchError> {
        debug!(patch = self.id, file = %file.display(), "reading patch target");
        let original = edit::read_file(file).map_err(|source| PatchError::Read {
            path: file.to_path_buf(),
            source,
        })?;

        let edits = self.compute_edits(&original);
        let occurrences = edits.len();

        let outcome = if occurrences == 0 {
            if original.contains(self.replacement) {
                PatchOutcome::AlreadyApplied {
                    file: file.to_path_buf(),
                }
            } else {
                PatchOutcome::NoMatch {
                    file: file.to_path_buf(),
                }
            }
        } else {
            let write_err = |source: EditError| PatchError::Write {
                path: file.to_path_buf(),
                source,
            };
            let patched = Edit::splice_all(&original, edits).map_err(write_err)?;
            edit::write_file(file, patched.as_bytes()).map_err(write_err)?;
            PatchOutcome::Applied {
                file: file.to_path_buf(),
                occurrences,
                original,
                patched,
            }
        };

        info!(patch = self.id, "{outcome}");
        Ok(outcome)
    }
}
