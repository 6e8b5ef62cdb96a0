//! Pattern filtering across candidate path lists.

use crate::matcher::FuzzyMatcher;
use crate::result::{FileMatch, SearchSource, SourceMatch};

/// Filters and ranks candidate paths against a pattern.
///
/// An empty pattern yields no results; the caller renders the
/// "start typing" state instead of an empty list. Candidates that do not
/// contain the pattern as a case-insensitive ordered subsequence are
/// dropped. Results are ordered by descending score; equal scores keep
/// the original candidate order.
pub fn filter_paths(
    matcher: &mut FuzzyMatcher,
    paths: &[String],
    pattern: &str,
) -> Vec<FileMatch> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<FileMatch> = paths
        .iter()
        .filter_map(|path| {
            matcher
                .score_with_indices(pattern, path)
                .map(|(score, indices)| FileMatch {
                    path: path.clone(),
                    score,
                    indices,
                })
        })
        .collect();

    // sort_by is stable: ties keep candidate order
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::trace!(
        pattern,
        candidates = paths.len(),
        matched = matches.len(),
        "filtered candidate paths"
    );

    matches
}

/// Filters every source and concatenates the per-source rankings in
/// source order, pairing each match with its root directory.
pub fn filter_sources(
    matcher: &mut FuzzyMatcher,
    sources: &[SearchSource],
    pattern: &str,
) -> Vec<SourceMatch> {
    sources
        .iter()
        .flat_map(|source| {
            filter_paths(matcher, &source.paths, pattern)
                .into_iter()
                .map(|file| SourceMatch {
                    root_dir: source.root_dir.clone(),
                    file,
                })
        })
        .collect()
}
