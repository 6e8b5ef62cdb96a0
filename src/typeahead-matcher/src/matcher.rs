//! Fuzzy matching implementation using nucleo-matcher.

use nucleo_matcher::{
    Config, Matcher, Utf32Str,
    pattern::{AtomKind, CaseMatching, Normalization, Pattern},
};

/// Fuzzy matcher tuned for file paths.
///
/// Wraps nucleo-matcher with path scoring enabled, so characters matched
/// right after a path separator and contiguous runs score higher than
/// the same characters scattered through the haystack. Case-insensitive
/// for lowercase patterns (smart case).
#[derive(Debug)]
pub struct FuzzyMatcher {
    matcher: Matcher,
    case_sensitive: bool,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    /// Creates a new path-aware fuzzy matcher.
    pub fn new() -> Self {
        let mut config = Config::DEFAULT;
        config.set_match_paths();
        Self {
            matcher: Matcher::new(config),
            case_sensitive: false,
        }
    }

    /// Creates a matcher that respects the pattern's case exactly.
    pub fn case_sensitive() -> Self {
        let mut config = Config::DEFAULT;
        config.set_match_paths();
        Self {
            matcher: Matcher::new(config),
            case_sensitive: true,
        }
    }

    fn case_matching(&self) -> CaseMatching {
        if self.case_sensitive {
            CaseMatching::Respect
        } else {
            CaseMatching::Smart
        }
    }

    /// Computes the fuzzy match score for a pattern against a path.
    ///
    /// Returns `None` if the pattern is not an ordered subsequence of the
    /// path, or `Some(score)` where higher is better.
    pub fn score(&mut self, pattern: &str, haystack: &str) -> Option<u32> {
        if pattern.is_empty() {
            return Some(0);
        }
        if haystack.is_empty() {
            return None;
        }

        let pat = Pattern::new(
            pattern,
            self.case_matching(),
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut haystack_buf = Vec::new();
        let haystack_chars = Utf32Str::new(haystack, &mut haystack_buf);

        pat.score(haystack_chars, &mut self.matcher)
    }

    /// Computes the fuzzy match score and the matched character offsets.
    ///
    /// Offsets index characters of the raw haystack, sorted ascending and
    /// deduplicated. The same `(pattern, haystack)` pair always yields the
    /// same offsets; highlight rendering depends on that stability.
    pub fn score_with_indices(
        &mut self,
        pattern: &str,
        haystack: &str,
    ) -> Option<(u32, Vec<usize>)> {
        if pattern.is_empty() {
            return Some((0, Vec::new()));
        }
        if haystack.is_empty() {
            return None;
        }

        let pat = Pattern::new(
            pattern,
            self.case_matching(),
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut haystack_buf = Vec::new();
        let haystack_chars = Utf32Str::new(haystack, &mut haystack_buf);

        let mut indices = Vec::new();
        let score = pat.indices(haystack_chars, &mut self.matcher, &mut indices)?;

        // nucleo does not guarantee sorted or unique indices
        indices.sort_unstable();
        indices.dedup();
        let indices: Vec<usize> = indices.iter().map(|&i| i as usize).collect();

        Some((score, indices))
    }

    /// Checks whether a pattern matches a path at all.
    pub fn matches(&mut self, pattern: &str, haystack: &str) -> bool {
        self.score(pattern, haystack).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_basic() {
        let mut matcher = FuzzyMatcher::new();

        assert!(matcher.score("main", "main").is_some());
        assert!(matcher.score("main", "src/main.rs").is_some());
        assert!(matcher.score("mn", "main").is_some());
        assert!(matcher.score("xyz", "main").is_none());
    }

    #[test]
    fn test_score_case_insensitive() {
        let mut matcher = FuzzyMatcher::new();

        assert!(matcher.score("main", "Main.rs").is_some());
        assert!(matcher.score("main", "MAIN.RS").is_some());
    }

    #[test]
    fn test_score_empty_inputs() {
        let mut matcher = FuzzyMatcher::new();

        assert_eq!(matcher.score("", "anything"), Some(0));
        assert!(matcher.score("pattern", "").is_none());
    }

    #[test]
    fn test_substring_outranks_scattered() {
        let mut matcher = FuzzyMatcher::new();

        let contiguous = matcher.score("bar", "src/foo/bar.js").unwrap();
        let scattered = matcher.score("bar", "b/all/roots.js").unwrap();
        assert!(contiguous > scattered);
    }

    #[test]
    fn test_segment_boundary_outranks_interior() {
        let mut matcher = FuzzyMatcher::new();

        let boundary = matcher.score("bar", "src/bar.js").unwrap();
        let interior = matcher.score("bar", "src/rebar.js").unwrap();
        assert!(boundary > interior);
    }

    #[test]
    fn test_indices_sorted_unique_in_range() {
        let mut matcher = FuzzyMatcher::new();

        for (pattern, haystack) in [
            ("bar", "src/foo/bar.js"),
            ("sfb", "src/foo/bar.js"),
            ("test", "src/__tests__/utils.test.js"),
        ] {
            let (_, indices) = matcher.score_with_indices(pattern, haystack).unwrap();
            assert!(!indices.is_empty());
            let len = haystack.chars().count();
            for window in indices.windows(2) {
                assert!(window[0] < window[1], "indices not strictly increasing");
            }
            assert!(indices.iter().all(|&i| i < len));
        }
    }

    #[test]
    fn test_indices_deterministic() {
        let mut matcher = FuzzyMatcher::new();

        let first = matcher.score_with_indices("bar", "src/foo/bar.js");
        let second = matcher.score_with_indices("bar", "src/foo/bar.js");
        assert_eq!(first, second);
    }

    #[test]
    fn test_indices_land_on_contiguous_run() {
        let mut matcher = FuzzyMatcher::new();

        // "bar" should be consumed from "bar.js", not scattered earlier
        let (_, indices) = matcher.score_with_indices("bar", "src/foo/bar.js").unwrap();
        assert_eq!(indices, vec![8, 9, 10]);
    }

    #[test]
    fn test_pattern_with_separator() {
        let mut matcher = FuzzyMatcher::new();

        // a separator in the pattern is matched as an ordinary character
        assert!(matcher.matches("foo/bar", "src/foo/bar.js"));
        assert!(!matcher.matches("foo/bar", "src/foobar.js"));
    }

    #[test]
    fn test_case_sensitive_matcher() {
        let mut matcher = FuzzyMatcher::case_sensitive();

        assert!(matcher.score("main", "main.rs").is_some());
        assert!(matcher.score("MAIN", "main.rs").is_none());
    }
}
