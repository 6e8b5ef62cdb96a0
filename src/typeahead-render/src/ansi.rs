//! ANSI escape code handling.
//!
//! The renderer builds styled strings out of the constants in [`colors`]
//! and strips them back out with [`strip_ansi_codes`] whenever it needs
//! to measure or index display text.

use std::io::IsTerminal;

use unicode_width::UnicodeWidthStr;

/// ANSI style codes used by the typeahead renderer.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const BLACK: &str = "\x1b[30m";
    pub const GRAY: &str = "\x1b[90m";
    pub const YELLOW_BG: &str = "\x1b[43m";
}

/// Check if stdout should carry colors/ANSI codes.
///
/// Returns false when stdout is piped or the NO_COLOR environment
/// variable is set (https://no-color.org/). The core renderer always
/// emits styles; hosts gate on this before writing.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Strip ANSI escape sequences from a string.
///
/// Handles CSI sequences (colors, cursor movement, clears) and OSC
/// sequences terminated by BEL or ST.
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some('[') => {
                chars.next();
                // consume until the alphabetic terminator
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            Some(']') => {
                chars.next();
                // consume until BEL or ST
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Display width of a string with its styling removed.
pub fn display_width(s: &str) -> usize {
    strip_ansi_codes(s).width()
}
