//! Back-to-top control.

use dioxus::prelude::*;

use crate::state::UiState;
use crate::viewport;

/// Control that appears once the page is scrolled past the threshold and
/// smooth-scrolls back to the origin when clicked. Visibility is updated by
/// the app's scroll watcher via [`UiState::show_back_to_top`].
#[component]
pub fn BackToTop() -> Element {
    let state = use_context::<UiState>();
    if !*state.show_back_to_top.read() {
        return rsx! {};
    }

    rsx! {
        a {
            class: "back-to-top",
            href: "#",
            onclick: move |evt| {
                evt.prevent_default();
                viewport::scroll_to_top();
            },
            i { class: "bi bi-arrow-up" }
        }
    }
}
