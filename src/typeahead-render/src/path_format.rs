//! Terminal-width-aware path truncation.
//!
//! Paths degrade in three steps as the column budget shrinks: full
//! dirname + basename, then left-trimmed dirname with the basename kept
//! whole, then a left-trimmed basename alone. The style-stripped result
//! never exceeds the budget (budgets below 4 columns are unsupported).

use std::path::Path;

use crate::ansi::colors::{BOLD, DIM, RESET};

/// Marker prepended when the front of a path has been cut off.
pub(crate) const TRIM: &str = "...";

pub(crate) struct RelativeParts {
    pub dirname: String,
    pub basename: String,
}

/// Relativizes a path against the project root and splits it into
/// dirname and basename, with separators normalized to `/`.
pub(crate) fn relative_parts(root_dir: &Path, file_path: &str) -> RelativeParts {
    let path = Path::new(file_path);
    let relative = path.strip_prefix(root_dir).unwrap_or(path);
    let normalized = relative.to_string_lossy().replace('\\', "/");

    match normalized.rsplit_once('/') {
        Some((dirname, basename)) => RelativeParts {
            dirname: dirname.to_string(),
            basename: basename.to_string(),
        },
        None => RelativeParts {
            dirname: ".".to_string(),
            basename: normalized,
        },
    }
}

fn char_tail(s: &str, keep: usize) -> String {
    let len = s.chars().count();
    s.chars().skip(len.saturating_sub(keep)).collect()
}

/// Formats a path to fit `columns - pad` terminal columns.
///
/// The directory part renders dim, the basename bold. When the whole
/// path does not fit, the directory is trimmed from its left behind a
/// `...` marker; when even `.../` plus the basename overflows, the
/// directory is dropped and the basename itself is trimmed from the
/// left.
pub fn trim_and_format_path(
    pad: usize,
    root_dir: &Path,
    file_path: &str,
    columns: usize,
) -> String {
    let budget = columns.saturating_sub(pad);
    let RelativeParts { dirname, basename } = relative_parts(root_dir, file_path);
    let dir_len = dirname.chars().count();
    let base_len = basename.chars().count();

    // length is ok
    if dir_len + 1 + base_len <= budget {
        return format!("{DIM}{dirname}/{RESET}{BOLD}{basename}{RESET}");
    }

    // trimmed dirname and full basename fit
    if base_len + 4 < budget {
        let keep = budget - 4 - base_len;
        let trimmed = char_tail(&dirname, keep);
        return format!("{DIM}{TRIM}{trimmed}/{RESET}{BOLD}{basename}{RESET}");
    }

    if base_len + 4 == budget {
        return format!("{DIM}{TRIM}/{RESET}{BOLD}{basename}{RESET}");
    }

    // no room for any dirname: trim the basename itself
    let keep = budget.saturating_sub(TRIM.chars().count());
    let tail = char_tail(&basename, keep);
    format!("{BOLD}{TRIM}{tail}{RESET}")
}
