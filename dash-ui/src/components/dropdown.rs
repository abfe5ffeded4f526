//! Dropdown menu with exclusivity and keyboard navigation.

use dioxus::prelude::*;

use crate::keyboard;
use crate::state::UiState;
use crate::viewport;

/// One entry in a dropdown menu.
#[derive(Clone, PartialEq)]
pub struct DropdownEntry {
    pub label: String,
    pub href: String,
}

/// Dropdown menu.
///
/// The open state lives in [`UiState::open_dropdown`], so opening one menu
/// closes any other. Within an open menu, Up/Down move focus across the
/// visible items without wrapping and Escape closes the menu and returns
/// focus to its trigger.
#[component]
pub fn Dropdown(
    id: String,
    trigger_label: String,
    entries: Vec<DropdownEntry>,
    /// Count shown on the trigger badge; 0 hides the badge.
    #[props(default)]
    badge: usize,
) -> Element {
    let mut state = use_context::<UiState>();
    let mut focused: Signal<Option<usize>> = use_signal(|| None);
    let open = state.is_dropdown_open(&id);
    let count = entries.len();
    let toggle_id = format!("{id}-toggle");

    let on_toggle = {
        let id = id.clone();
        move |_| {
            focused.set(None);
            state.toggle_dropdown(&id);
        }
    };

    let on_keydown = {
        let id = id.clone();
        let toggle_id = toggle_id.clone();
        move |evt: Event<KeyboardData>| match evt.key() {
            Key::ArrowDown => {
                evt.prevent_default();
                let next = keyboard::next_item(*focused.read(), count);
                focused.set(next);
                if let Some(i) = next {
                    viewport::focus_element(&format!("{id}-item-{i}"));
                }
            }
            Key::ArrowUp => {
                evt.prevent_default();
                let prev = keyboard::prev_item(*focused.read(), count);
                focused.set(prev);
                if let Some(i) = prev {
                    viewport::focus_element(&format!("{id}-item-{i}"));
                }
            }
            Key::Escape => {
                state.close_dropdowns();
                focused.set(None);
                viewport::focus_element(&toggle_id);
            }
            _ => {}
        }
    };

    rsx! {
        div {
            class: "dropdown",
            button {
                id: "{toggle_id}",
                class: "dropdown-toggle",
                onclick: on_toggle,
                "{trigger_label}"
                if badge > 0 {
                    span { id: "{id}-badge", class: "badge", "{badge}" }
                }
            }
            if open {
                div {
                    class: "dropdown-menu show",
                    onkeydown: on_keydown,
                    for (i, entry) in entries.iter().enumerate() {
                        a {
                            key: "{entry.label}",
                            id: "{id}-item-{i}",
                            class: "dropdown-item",
                            href: "{entry.href}",
                            "{entry.label}"
                        }
                    }
                }
            }
        }
    }
}
