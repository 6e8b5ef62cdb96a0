//! Pattern input loop and render pass for the watch typeahead.
//!
//! The host decodes keystrokes and owns the terminal; this crate owns
//! everything in between: the pattern buffer, the scroll window over the
//! ranked matches, and the synchronous render pass that turns one
//! keystroke into display-ready lines via `typeahead-matcher` and
//! `typeahead-render`.
//!
//! The interactive piece is composition, not inheritance: a
//! [`PatternPrompt`] owns the input state and delegates each change to a
//! [`TypeaheadView`] strategy supplied by the host.

mod config;
mod pattern;
mod scroll;
mod typeahead;

pub use config::{ConfigError, PluginConfig, UsageInfo};
pub use pattern::PatternBuffer;
pub use scroll::{ScrollState, ScrollWindow, scroll};
pub use typeahead::{
    FuzzyFileView, MatchList, PatternPrompt, TerminalLayout, TypeaheadOutput, TypeaheadView,
    matches_header, more_line, start_typing_line,
};
