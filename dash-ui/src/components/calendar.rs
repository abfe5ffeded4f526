//! Inline month calendar.

use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Lay out a month as Sunday-first weeks.
///
/// Cells before the first and after the last day of the month are `None`.
/// Every day of the month appears exactly once.
pub fn month_grid(year: i32, month: u32) -> Vec<[Option<u32>; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let Some(next_month) = next_month else {
        return Vec::new();
    };
    let days = (next_month - first).num_days() as u32;
    let offset = first.weekday().num_days_from_sunday() as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = offset;
    for day in 1..=days {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

/// Inline calendar card showing the current month with today highlighted.
#[component]
pub fn CalendarCard() -> Element {
    let today = use_hook(|| Local::now().date_naive());
    let weeks = month_grid(today.year(), today.month());
    let title = today.format("%B %Y").to_string();

    rsx! {
        div {
            id: "calender",
            class: "calendar-card",
            h6 { class: "calendar-title", "{title}" }
            table {
                class: "calendar-table",
                thead {
                    tr {
                        for name in WEEKDAYS.iter() {
                            th { key: "{name}", "{name}" }
                        }
                    }
                }
                tbody {
                    for (w, week) in weeks.iter().enumerate() {
                        tr {
                            key: "{w}",
                            for (s, cell) in week.iter().enumerate() {
                                td {
                                    key: "{s}",
                                    class: if *cell == Some(today.day()) { "today" } else { "" },
                                    if let Some(day) = cell {
                                        "{day}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days_of(weeks: &[[Option<u32>; 7]]) -> Vec<u32> {
        weeks.iter().flatten().filter_map(|c| *c).collect()
    }

    #[test]
    fn every_day_appears_exactly_once() {
        let weeks = month_grid(2026, 8);
        let days = days_of(&weeks);
        assert_eq!(days, (1..=31).collect::<Vec<_>>());
    }

    #[test]
    fn leap_february_has_29_days() {
        let days = days_of(&month_grid(2024, 2));
        assert_eq!(days.len(), 29);
        assert_eq!(days.last(), Some(&29));
    }

    #[test]
    fn first_week_is_offset_by_weekday() {
        // 2022-01-01 was a Saturday: six leading empty cells.
        let weeks = month_grid(2022, 1);
        let leading = weeks[0].iter().take_while(|c| c.is_none()).count();
        assert_eq!(leading, 6);
        assert_eq!(weeks[0][6], Some(1));
    }

    #[test]
    fn december_rolls_into_next_year() {
        let days = days_of(&month_grid(2025, 12));
        assert_eq!(days.len(), 31);
    }

    #[test]
    fn invalid_month_yields_empty_grid() {
        assert!(month_grid(2026, 13).is_empty());
    }
}
