//! Fuzzy filename matching for the watch typeahead.
//!
//! This crate ranks project file paths against the pattern the user is
//! typing, using nucleo-matcher with path-aware scoring: matches landing
//! on path-segment boundaries or extending a contiguous run outrank
//! scattered characters. Every match carries the character offsets that
//! were consumed, so the renderer can highlight them.
//!
//! # Example
//!
//! ```
//! use typeahead_matcher::{FuzzyMatcher, filter_paths};
//!
//! let mut matcher = FuzzyMatcher::new();
//! let paths = vec!["src/foo/bar.js".to_string(), "src/baz.js".to_string()];
//! let matches = filter_paths(&mut matcher, &paths, "bar");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].path, "src/foo/bar.js");
//! ```

mod filter;
mod matcher;
mod result;

pub use filter::{filter_paths, filter_sources};
pub use matcher::FuzzyMatcher;
pub use result::{FileMatch, SearchSource, SourceMatch};
