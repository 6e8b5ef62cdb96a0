//! Scroll window bookkeeping for the result list.

/// Host-owned cursor state: which result is selected and how many rows
/// fit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    /// Selection offset into the full ranked result list.
    pub offset: usize,

    /// Maximum number of visible rows.
    pub max: usize,
}

impl ScrollState {
    pub fn new(offset: usize, max: usize) -> Self {
        Self { offset, max }
    }
}

/// The visible slice of the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    /// First visible result (inclusive).
    pub start: usize,

    /// One past the last visible result.
    pub end: usize,

    /// Selected row, relative to `start`.
    pub index: usize,
}

/// Computes the visible window over `total` ranked results.
///
/// The selection is clamped to the list; once it moves past the middle
/// of the page the window slides to keep it in view, pinned so the last
/// page stays full.
pub fn scroll(total: usize, state: &ScrollState) -> ScrollWindow {
    if total == 0 || state.max == 0 {
        return ScrollWindow {
            start: 0,
            end: 0,
            index: 0,
        };
    }

    let mut index = state.offset.min(total - 1);
    let half = state.max / 2;
    let mut start = 0;

    if index > half && total > state.max {
        start = (index - half).min(total - state.max);
        index -= start;
    }

    ScrollWindow {
        start,
        end: (start + state.max).min(total),
        index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let window = scroll(0, &ScrollState::new(3, 10));
        assert_eq!(window, ScrollWindow { start: 0, end: 0, index: 0 });
    }

    #[test]
    fn test_everything_fits() {
        let window = scroll(4, &ScrollState::new(2, 10));
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 4);
        assert_eq!(window.index, 2);
    }

    #[test]
    fn test_selection_in_first_half_keeps_window_at_top() {
        let window = scroll(100, &ScrollState::new(2, 10));
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 10);
        assert_eq!(window.index, 2);
    }

    #[test]
    fn test_window_slides_with_selection() {
        let window = scroll(100, &ScrollState::new(50, 10));
        assert_eq!(window.start, 45);
        assert_eq!(window.end, 55);
        assert_eq!(window.index, 5);
    }

    #[test]
    fn test_window_pins_at_end() {
        let window = scroll(100, &ScrollState::new(99, 10));
        assert_eq!(window.start, 90);
        assert_eq!(window.end, 100);
        assert_eq!(window.index, 9);
    }

    #[test]
    fn test_offset_clamped_to_list() {
        let window = scroll(5, &ScrollState::new(42, 10));
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 5);
        assert_eq!(window.index, 4);
    }

    #[test]
    fn test_window_never_exceeds_total() {
        for total in 0..30 {
            for offset in 0..35 {
                let window = scroll(total, &ScrollState::new(offset, 7));
                assert!(window.end <= total);
                assert!(window.start <= window.end);
                if total > 0 {
                    assert!(window.start + window.index < total);
                }
            }
        }
    }
}
