//! Progress bars that fill in once scrolled into view.

use dioxus::prelude::*;

use crate::viewport;

/// Fraction of the viewport height the card top must cross before the bars
/// fill in.
const REVEAL_FRACTION: f64 = 0.8;

/// One labelled bar of a [`ProgressCard`].
#[derive(Clone, PartialEq)]
pub struct ProgressEntry {
    pub label: String,
    /// Percentage, clamped to 100 when rendered.
    pub value: u32,
}

/// CSS width for a bar value.
pub fn bar_width(value: u32) -> String {
    format!("{}%", value.min(100))
}

fn bar_style(shown: bool, value: u32) -> String {
    if shown {
        format!("width: {}", bar_width(value))
    } else {
        "width: 0%".to_string()
    }
}

/// Whether an element whose top sits at `rect_top` (viewport-relative) has
/// scrolled far enough into a viewport of `viewport_height` to reveal.
pub fn bar_revealed(rect_top: f64, viewport_height: f64) -> bool {
    rect_top <= viewport_height * REVEAL_FRACTION
}

/// Card of labelled progress bars.
///
/// Bars render at zero width until the card scrolls into view, then fill to
/// their value in one step (the CSS width transition carries the animation).
/// The reveal is one-way: scrolling back up does not reset the bars.
#[component]
pub fn ProgressCard(id: String, title: String, entries: Vec<ProgressEntry>) -> Element {
    let mut revealed = use_signal(|| false);

    use_effect({
        let id = id.clone();
        move || {
            let mut check = {
                let id = id.clone();
                // `peek` keeps the mount effect unsubscribed, so the
                // listener is attached exactly once.
                move || {
                    let mut revealed = revealed;
                    if *revealed.peek() {
                        return;
                    }
                    if let Some(top) = viewport::element_top(&id) {
                        if bar_revealed(top, viewport::viewport_height()) {
                            revealed.set(true);
                        }
                    }
                }
            };
            // The card may already be in view at mount.
            check();
            viewport::on_window_event("scroll", check);
        }
    });

    let shown = *revealed.read();

    rsx! {
        div {
            id: "{id}",
            class: "pg-bar",
            h6 { class: "mb-4", "{title}" }
            for entry in entries.iter() {
                div {
                    key: "{entry.label}",
                    class: "mb-3",
                    div {
                        class: "d-flex justify-content-between",
                        span { "{entry.label}" }
                        span { "{entry.value}%" }
                    }
                    div {
                        class: "progress",
                        div {
                            class: "progress-bar",
                            role: "progressbar",
                            "aria-valuenow": "{entry.value}",
                            "aria-valuemin": "0",
                            "aria-valuemax": "100",
                            style: bar_style(shown, entry.value),
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

    #[test]
    fn bar_width_is_the_value_as_a_percentage() {
        assert_eq!(bar_width(0), "0%");
        assert_eq!(bar_width(85), "85%");
    }

    #[test]
    fn bar_width_clamps_at_full() {
        assert_eq!(bar_width(140), "100%", "values past 100 render as full bars");
    }

    #[test]
    fn bars_stay_at_zero_width_until_revealed() {
        assert_eq!(bar_style(false, 85), "width: 0%");
        assert_eq!(bar_style(true, 85), "width: 85%");
    }

    #[test]
    fn bars_reveal_at_eighty_percent_of_the_viewport() {
        // 1000px viewport: the trigger line sits at 800px.
        assert!(bar_revealed(800.0, 1000.0));
        assert!(bar_revealed(120.0, 1000.0), "well inside the viewport");
        assert!(
            !bar_revealed(801.0, 1000.0),
            "below the trigger line stays at zero width"
        );
    }
}
