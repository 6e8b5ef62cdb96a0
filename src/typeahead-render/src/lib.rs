//! Terminal-width-aware path formatting and match highlighting.
//!
//! Given a ranked match from `typeahead-matcher`, this crate produces a
//! display-ready styled string: the path is relativized against its
//! project root, truncated from the left to fit the terminal column
//! budget, and the matched characters are re-highlighted after their
//! offsets have been corrected for everything truncation removed.
//!
//! All length and index arithmetic runs on style-stripped text; ANSI
//! codes never perturb the offset math.

pub mod ansi;
mod highlight;
mod path_format;

pub use highlight::{highlight_fuzzy, highlight_pattern};
pub use path_format::trim_and_format_path;
