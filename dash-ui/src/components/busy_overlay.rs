//! Full-screen busy overlay.

use dioxus::prelude::*;

use crate::state::UiState;

/// Spinner shown while any request is in flight.
///
/// Visibility is driven by the [`UiState::busy`] counter: the first
/// [`UiState::begin_busy`] shows the overlay, dropping the last guard hides
/// it.
#[component]
pub fn BusyOverlay() -> Element {
    let state = use_context::<UiState>();
    let class = if state.is_busy() {
        "spinner-overlay show"
    } else {
        "spinner-overlay"
    };

    rsx! {
        div {
            id: "spinner",
            class: "{class}",
            div { class: "spinner-border text-primary", role: "status" }
        }
    }
}
