//! The typeahead render pass.
//!
//! One keystroke drives one full synchronous pass: filter the candidate
//! snapshot, window the ranking, format and highlight every visible row.
//! The host owns the terminal and prints whatever comes back.

use typeahead_matcher::{FuzzyMatcher, SearchSource, filter_sources};
use typeahead_render::ansi::colors::{BLACK, DIM, RESET, YELLOW_BG};
use typeahead_render::ansi::{display_width, strip_ansi_codes};
use typeahead_render::{highlight_fuzzy, trim_and_format_path};

use crate::pattern::PatternBuffer;
use crate::scroll::{ScrollState, scroll};

/// Display geometry, resolved by the host per render.
///
/// The core never reads live terminal dimensions; the host threads the
/// current width in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalLayout {
    /// Terminal columns available for one row.
    pub columns: usize,

    /// Rows the result list may occupy.
    pub rows: usize,
}

/// Everything one render pass produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeaheadOutput {
    /// Empty pattern: the host shows the "start typing" hint.
    StartTyping,

    /// Ranked matches, formatted for display.
    Matches(MatchList),
}

/// The visible slice of the ranking, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchList {
    /// Total number of matches across all sources.
    pub total: usize,

    /// Styled display rows for the visible window, in rank order.
    pub rows: Vec<String>,

    /// Matches ranked below the window.
    pub hidden: usize,

    /// Style-stripped path of the selected row, if any; the host
    /// resolves this to the final filter value on confirm.
    pub selected: Option<String>,
}

/// Render strategy a [`PatternPrompt`] delegates to on every change.
pub trait TypeaheadView {
    fn render(&mut self, pattern: &str, state: &ScrollState) -> TypeaheadOutput;
}

/// Fuzzy filename view over the host's current project snapshot.
#[derive(Debug)]
pub struct FuzzyFileView {
    matcher: FuzzyMatcher,
    sources: Vec<SearchSource>,
    layout: TerminalLayout,
}

impl FuzzyFileView {
    pub fn new(layout: TerminalLayout) -> Self {
        Self {
            matcher: FuzzyMatcher::new(),
            sources: Vec::new(),
            layout,
        }
    }

    /// Replaces the candidate snapshot after a file-system change.
    pub fn update_sources(&mut self, sources: Vec<SearchSource>) {
        self.sources = sources;
    }

    /// Updates the display geometry, e.g. after a terminal resize.
    pub fn set_layout(&mut self, layout: TerminalLayout) {
        self.layout = layout;
    }
}

impl TypeaheadView for FuzzyFileView {
    fn render(&mut self, pattern: &str, state: &ScrollState) -> TypeaheadOutput {
        render_pass(
            &mut self.matcher,
            &self.sources,
            pattern,
            &self.layout,
            state,
        )
    }
}

/// Row prefix: two spaces, a dim pointer glyph, one space.
fn row_prefix() -> String {
    format!("  {DIM}\u{203A}{RESET} ")
}

/// Runs one full match-and-format pass.
pub fn render_pass(
    matcher: &mut FuzzyMatcher,
    sources: &[SearchSource],
    pattern: &str,
    layout: &TerminalLayout,
    state: &ScrollState,
) -> TypeaheadOutput {
    if pattern.is_empty() {
        return TypeaheadOutput::StartTyping;
    }

    let matches = filter_sources(matcher, sources, pattern);
    let total = matches.len();
    let window = scroll(total, &ScrollState::new(state.offset, layout.rows.min(state.max)));

    let prefix = row_prefix();
    let padding = display_width(&prefix) + 2;

    let mut selected = None;
    let rows: Vec<String> = matches[window.start..window.end]
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let formatted =
                trim_and_format_path(padding, &m.root_dir, &m.file.path, layout.columns);
            let item = highlight_fuzzy(&m.file.path, &formatted, &m.root_dir, &m.file.indices);
            if i == window.index {
                let plain = strip_ansi_codes(&item);
                selected = Some(plain.clone());
                format!("{prefix}{BLACK}{YELLOW_BG}{plain}{RESET}")
            } else {
                format!("{prefix}{item}")
            }
        })
        .collect();

    tracing::debug!(pattern, total, visible = rows.len(), "typeahead render pass");

    TypeaheadOutput::Matches(MatchList {
        total,
        rows,
        hidden: total - window.end,
        selected,
    })
}

/// Header line above the result list.
pub fn matches_header(total: usize) -> String {
    let plural = if total == 1 { "" } else { "s" };
    format!(" {DIM}Pattern matches {total} file{plural}{RESET}")
}

/// Overflow line below the result list.
pub fn more_line(hidden: usize) -> String {
    let plural = if hidden == 1 { "" } else { "s" };
    format!("  {DIM}...and {hidden} more file{plural}{RESET}")
}

/// Hint shown while the pattern is still empty.
pub fn start_typing_line() -> String {
    format!(" {DIM}Start typing to filter by a filename fuzzy pattern.{RESET}")
}

/// Interactive prompt: owns the pattern buffer and selection cursor,
/// delegates rendering to an injected [`TypeaheadView`] strategy.
///
/// One change event is fully processed before the next is dispatched;
/// nothing here suspends or blocks.
#[derive(Debug)]
pub struct PatternPrompt<V> {
    buffer: PatternBuffer,
    scroll: ScrollState,
    view: V,
}

impl<V: TypeaheadView> PatternPrompt<V> {
    /// Creates a prompt over a view, with `page_size` selectable rows.
    pub fn new(view: V, page_size: usize) -> Self {
        Self {
            buffer: PatternBuffer::new(),
            scroll: ScrollState::new(0, page_size),
            view,
        }
    }

    /// Current pattern.
    pub fn pattern(&self) -> &str {
        self.buffer.as_str()
    }

    /// Appends a typed character and re-renders. Editing the pattern
    /// resets the selection to the top.
    pub fn put(&mut self, key: char) -> TypeaheadOutput {
        self.buffer.push(key);
        self.scroll.offset = 0;
        self.on_change()
    }

    /// Deletes the last character and re-renders.
    pub fn backspace(&mut self) -> TypeaheadOutput {
        self.buffer.backspace();
        self.scroll.offset = 0;
        self.on_change()
    }

    /// Moves the selection down one row and re-renders.
    pub fn selection_down(&mut self) -> TypeaheadOutput {
        self.scroll.offset = self.scroll.offset.saturating_add(1);
        self.on_change()
    }

    /// Moves the selection up one row and re-renders.
    pub fn selection_up(&mut self) -> TypeaheadOutput {
        self.scroll.offset = self.scroll.offset.saturating_sub(1);
        self.on_change()
    }

    /// Re-renders without changing state, e.g. after the candidate
    /// snapshot was refreshed.
    pub fn refresh(&mut self) -> TypeaheadOutput {
        self.on_change()
    }

    /// Access to the injected view, e.g. to push a new snapshot.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn on_change(&mut self) -> TypeaheadOutput {
        self.view.render(self.buffer.as_str(), &self.scroll)
    }
}
