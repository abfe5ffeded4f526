//! Keyboard navigation logic for dropdown menus.
//!
//! Focus moves linearly over the visible items. There is no wrap-around:
//! pressing Up on the first item or Down on the last keeps focus where it
//! is. With nothing focused yet, Down lands on the first item and Up on the
//! last.

/// Item to focus after a Down-arrow press.
pub fn next_item(current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match current {
        None => Some(0),
        Some(i) if i + 1 < count => Some(i + 1),
        Some(i) => Some(i.min(count - 1)),
    }
}

/// Item to focus after an Up-arrow press.
pub fn prev_item(current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match current {
        None => Some(count - 1),
        Some(0) => Some(0),
        Some(i) => Some((i - 1).min(count - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_with_no_focus_lands_on_first() {
        assert_eq!(next_item(None, 4), Some(0));
    }

    #[test]
    fn up_with_no_focus_lands_on_last() {
        assert_eq!(prev_item(None, 4), Some(3));
    }

    #[test]
    fn down_advances_without_wrapping() {
        assert_eq!(next_item(Some(1), 4), Some(2));
        assert_eq!(next_item(Some(3), 4), Some(3), "last item stays put");
    }

    #[test]
    fn up_retreats_without_wrapping() {
        assert_eq!(prev_item(Some(2), 4), Some(1));
        assert_eq!(prev_item(Some(0), 4), Some(0), "first item stays put");
    }

    #[test]
    fn empty_menu_has_no_focus_target() {
        assert_eq!(next_item(None, 0), None);
        assert_eq!(prev_item(Some(2), 0), None);
    }

    #[test]
    fn stale_focus_index_is_clamped() {
        // Items can disappear between key presses.
        assert_eq!(next_item(Some(9), 3), Some(2));
        assert_eq!(prev_item(Some(9), 3), Some(2));
    }
}
