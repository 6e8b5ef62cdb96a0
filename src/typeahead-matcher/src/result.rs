//! Match result and search source types.

use std::path::PathBuf;

/// A single ranked match against one candidate path.
///
/// `indices` are character offsets into the raw, untruncated `path`,
/// strictly increasing, each naming one matched character. They are
/// recomputed fresh on every keystroke and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    /// The matched candidate path, exactly as supplied by the host.
    pub path: String,

    /// The fuzzy match score (higher is better).
    pub score: u32,

    /// Character offsets consumed by the best-scoring match.
    pub indices: Vec<usize>,
}

/// One group of searchable paths with the project root they belong to.
///
/// The host refreshes these on file-system change notifications; the
/// core treats a slice of sources as an immutable snapshot per pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSource {
    /// Root directory paths are displayed relative to.
    pub root_dir: PathBuf,

    /// Candidate file paths, absolute or project-relative.
    pub paths: Vec<String>,
}

impl SearchSource {
    /// Creates a search source for one project root.
    pub fn new(root_dir: impl Into<PathBuf>, paths: Vec<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            paths,
        }
    }
}

/// A match paired with the root directory of the source it came from.
///
/// The root travels with the match so the renderer can relativize the
/// path without knowing which source produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMatch {
    /// Root directory of the originating source.
    pub root_dir: PathBuf,

    /// The ranked match.
    pub file: FileMatch,
}
