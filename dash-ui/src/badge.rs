//! Notification badge count.

/// Badge value derived from the notification menu.
///
/// The menu's first entry is a header row, so the badge shows the entry
/// count minus one. At zero or below the badge is hidden (`None`). The
/// count is recomputed at load and on a fixed refresh interval; it is never
/// persisted.
pub fn badge_count(menu_entries: usize) -> Option<usize> {
    let count = menu_entries.saturating_sub(1);
    (count > 0).then_some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_the_header_row() {
        assert_eq!(badge_count(4), Some(3));
    }

    #[test]
    fn hidden_with_only_the_header() {
        assert_eq!(badge_count(1), None);
    }

    #[test]
    fn hidden_when_menu_is_empty() {
        assert_eq!(badge_count(0), None, "must not underflow below zero");
    }
}
