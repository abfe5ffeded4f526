//! Sidebar navigation with mobile overlay and desktop collapsed modes.

use dioxus::prelude::*;

use crate::state::UiState;
use crate::viewport;

/// One entry in the sidebar navigation.
#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

/// Sidebar navigation panel.
///
/// Two independent flags from [`UiState`] drive its CSS classes: `open`
/// (mobile overlay mode) and `collapsed` (desktop narrow mode). When open,
/// a page overlay is rendered; clicking it closes the sidebar and releases
/// the body scroll lock, leaving `collapsed` untouched.
///
/// In-page anchor links cancel the default jump and smooth-scroll to the
/// target, offset by the fixed header height.
#[component]
pub fn Sidebar(brand: String, links: Vec<NavLink>) -> Element {
    let mut state = use_context::<UiState>();
    let open = *state.sidebar_open.read();
    let collapsed = *state.sidebar_collapsed.read();

    let mut class = String::from("sidebar");
    if open {
        class.push_str(" open");
    }
    if collapsed {
        class.push_str(" collapsed");
    }

    rsx! {
        if open {
            div {
                class: "sidebar-overlay active",
                onclick: move |_| {
                    state.sidebar_open.set(false);
                    viewport::set_body_scroll_lock(false);
                },
            }
        }
        nav {
            class: "{class}",
            a { class: "navbar-brand", href: "#", "{brand}" }
            div {
                class: "navbar-nav",
                for link in links.iter() {
                    a {
                        key: "{link.href}",
                        class: "nav-item nav-link",
                        href: "{link.href}",
                        onclick: {
                            let href = link.href.clone();
                            move |evt: Event<MouseData>| {
                                if let Some(fragment) = viewport::anchor_fragment(&href) {
                                    evt.prevent_default();
                                    viewport::scroll_to_anchor(fragment);
                                }
                            }
                        },
                        i { class: "{link.icon}" }
                        span { "{link.label}" }
                    }
                }
            }
        }
    }
}
