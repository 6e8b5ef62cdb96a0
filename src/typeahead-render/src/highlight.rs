//! Match highlighting over truncated display paths.
//!
//! Match offsets are computed against the raw candidate path, but the
//! displayed string has been relativized and possibly truncated, so each
//! offset is shifted into the displayed string's coordinate space first.
//! Offsets that point at characters no longer visible are dropped.

use std::path::Path;

use regex::RegexBuilder;

use crate::ansi::colors::{DIM, GRAY, RESET};
use crate::ansi::strip_ansi_codes;
use crate::path_format::TRIM;

const RELATIVE_HEAD: &str = "./";

/// A maximal run of consecutive matched or unmatched characters.
#[derive(Debug, PartialEq, Eq)]
struct MatchRun {
    text: String,
    is_match: bool,
}

/// Number of characters removed from the front of the raw path to
/// produce the displayed path.
///
/// A displayed path starting with the trim marker or a relative head was
/// truncated, so the cut is the length difference; otherwise only the
/// root directory prefix and its separator were stripped.
fn front_offset(raw: &str, displayed: &str, root_dir: &Path) -> (usize, usize) {
    if displayed.starts_with(TRIM) {
        let offset = raw.chars().count().saturating_sub(displayed.chars().count());
        (offset, TRIM.chars().count())
    } else if displayed.starts_with(RELATIVE_HEAD) {
        let offset = raw.chars().count().saturating_sub(displayed.chars().count());
        (offset, RELATIVE_HEAD.chars().count())
    } else {
        (root_dir.to_string_lossy().chars().count() + 1, 0)
    }
}

/// Partitions `text` into maximal matched/unmatched runs.
///
/// `indices` must be sorted ascending and deduplicated; adjacent runs of
/// the same state merge. The index list is scratch local to this call.
fn split_matches(text: &str, indices: &[usize]) -> Vec<MatchRun> {
    let mut runs: Vec<MatchRun> = Vec::new();
    let mut pending = indices.iter().copied().peekable();

    for (i, c) in text.chars().enumerate() {
        let is_match = pending.peek() == Some(&i);
        if is_match {
            pending.next();
        }
        match runs.last_mut() {
            Some(run) if run.is_match == is_match => run.text.push(c),
            _ => runs.push(MatchRun {
                text: c.to_string(),
                is_match,
            }),
        }
    }

    runs
}

/// Highlights fuzzy-matched characters inside a formatted path.
///
/// `raw_path` is the untruncated candidate the offsets were computed
/// against; `file_path` is the output of
/// [`crate::trim_and_format_path`]. Matched runs render with the reset
/// style, unmatched runs gray.
pub fn highlight_fuzzy(
    raw_path: &str,
    file_path: &str,
    root_dir: &Path,
    indices: &[usize],
) -> String {
    let raw = strip_ansi_codes(raw_path);
    let displayed = strip_ansi_codes(file_path);
    let displayed_len = displayed.chars().count();

    let (offset, _) = front_offset(&raw, &displayed, root_dir);

    // shift into displayed coordinates, dropping what truncation removed
    let shifted: Vec<usize> = indices
        .iter()
        .filter_map(|&i| i.checked_sub(offset))
        .filter(|&i| i < displayed_len)
        .collect();

    let mut result = String::with_capacity(displayed.len());
    for run in split_matches(&displayed, &shifted) {
        let style = if run.is_match { RESET } else { GRAY };
        result.push_str(style);
        result.push_str(&run.text);
    }
    result.push_str(RESET);
    result
}

fn colorize(text: &str, start: usize, end: usize) -> String {
    let head: String = text.chars().take(start).collect();
    let mid: String = text.chars().skip(start).take(end - start).collect();
    let tail: String = text.chars().skip(end).collect();
    format!("{DIM}{head}{RESET}{mid}{DIM}{tail}{RESET}")
}

/// Legacy regex-based highlight, kept for hosts still filtering by a
/// plain pattern instead of fuzzy offsets.
///
/// An invalid pattern or a pattern that does not match degrades to the
/// path rendered fully dimmed; this never fails.
pub fn highlight_pattern(
    raw_path: &str,
    file_path: &str,
    pattern: &str,
    root_dir: &Path,
) -> String {
    let raw = strip_ansi_codes(raw_path);
    let displayed = strip_ansi_codes(file_path);

    let regex = match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => regex,
        Err(error) => {
            tracing::debug!(pattern, %error, "invalid highlight pattern, rendering dim");
            return format!("{DIM}{displayed}{RESET}");
        }
    };

    let Some(found) = regex.find(&raw) else {
        return format!("{DIM}{displayed}{RESET}");
    };

    let (offset, trim_len) = front_offset(&raw, &displayed, root_dir);

    let match_start = raw[..found.start()].chars().count();
    let match_len = found.as_str().chars().count();
    let displayed_len = displayed.chars().count();

    let start = match_start
        .checked_sub(offset)
        .unwrap_or(0)
        .min(displayed_len);
    let end = (start + match_len).max(trim_len).min(displayed_len);

    colorize(&displayed, start.min(end), end)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::path_format::trim_and_format_path;

    #[test]
    fn test_split_matches_merges_adjacent_runs() {
        let runs = split_matches("abcdef", &[1, 2, 4]);
        let collected: Vec<(String, bool)> =
            runs.into_iter().map(|r| (r.text, r.is_match)).collect();
        assert_eq!(
            collected,
            vec![
                ("a".to_string(), false),
                ("bc".to_string(), true),
                ("d".to_string(), false),
                ("e".to_string(), true),
                ("f".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_split_matches_no_indices() {
        let runs = split_matches("abc", &[]);
        assert_eq!(runs.len(), 1);
        assert!(!runs[0].is_match);
        assert_eq!(runs[0].text, "abc");
    }

    #[test]
    fn test_highlight_fuzzy_full_path() {
        let raw = "/repo/src/foo.js";
        let formatted = trim_and_format_path(0, Path::new("/repo"), raw, 80);
        // "foo" consumed at raw offsets 10..=12
        let out = highlight_fuzzy(raw, &formatted, Path::new("/repo"), &[10, 11, 12]);

        assert_eq!(out, format!("{GRAY}src/{RESET}foo{GRAY}.js{RESET}"));
        assert_eq!(strip_ansi_codes(&out), "src/foo.js");
    }

    #[test]
    fn test_highlight_fuzzy_truncated_path_remaps_offsets() {
        let raw = "/repo/a/b/c/very-long-name.js";
        let formatted = trim_and_format_path(0, Path::new("/repo"), raw, 10);
        assert_eq!(strip_ansi_codes(&formatted), "...name.js");

        // "name" in the raw path sits at offsets 22..=25
        let out = highlight_fuzzy(raw, &formatted, Path::new("/repo"), &[22, 23, 24, 25]);
        assert_eq!(out, format!("{GRAY}...{RESET}name{GRAY}.js{RESET}"));
    }

    #[test]
    fn test_highlight_fuzzy_drops_invisible_offsets() {
        let raw = "/repo/a/b/c/very-long-name.js";
        let formatted = trim_and_format_path(0, Path::new("/repo"), raw, 10);

        // offsets into the trimmed-away directory produce no highlight
        let out = highlight_fuzzy(raw, &formatted, Path::new("/repo"), &[6, 8, 10]);
        assert_eq!(out, format!("{GRAY}...name.js{RESET}"));
    }

    #[test]
    fn test_highlight_fuzzy_relative_head() {
        let raw = "/repo/foo.js";
        let formatted = trim_and_format_path(0, Path::new("/repo"), raw, 80);
        assert_eq!(strip_ansi_codes(&formatted), "./foo.js");

        // "foo" at raw offsets 6..=8 lands after the "./" head
        let out = highlight_fuzzy(raw, &formatted, Path::new("/repo"), &[6, 7, 8]);
        assert_eq!(out, format!("{GRAY}./{RESET}foo{GRAY}.js{RESET}"));
    }

    #[test]
    fn test_highlight_pattern_basic() {
        let raw = "/repo/src/foo.js";
        let formatted = trim_and_format_path(0, Path::new("/repo"), raw, 80);
        let out = highlight_pattern(raw, &formatted, "foo", Path::new("/repo"));

        assert_eq!(out, format!("{DIM}src/{RESET}foo{DIM}.js{RESET}"));
    }

    #[test]
    fn test_highlight_pattern_invalid_regex_degrades_to_dim() {
        let raw = "/repo/src/foo.js";
        let formatted = trim_and_format_path(0, Path::new("/repo"), raw, 80);
        let out = highlight_pattern(raw, &formatted, "(", Path::new("/repo"));

        assert_eq!(out, format!("{DIM}src/foo.js{RESET}"));
    }

    #[test]
    fn test_highlight_pattern_no_match_degrades_to_dim() {
        let raw = "/repo/src/foo.js";
        let formatted = trim_and_format_path(0, Path::new("/repo"), raw, 80);
        let out = highlight_pattern(raw, &formatted, "zzz", Path::new("/repo"));

        assert_eq!(out, format!("{DIM}src/foo.js{RESET}"));
    }

    #[test]
    fn test_highlight_pattern_case_insensitive() {
        let raw = "/repo/src/Foo.js";
        let formatted = trim_and_format_path(0, Path::new("/repo"), raw, 80);
        let out = highlight_pattern(raw, &formatted, "foo", Path::new("/repo"));

        assert_eq!(out, format!("{DIM}src/{RESET}Foo{DIM}.js{RESET}"));
    }
}
