//! Destructive-action confirmation.

use dioxus::prelude::*;

use crate::viewport;

/// Link that intercepts its default action behind a blocking confirmation
/// prompt. Navigation proceeds only when the user accepts; an accepted
/// in-page fragment goes through the smooth anchor scroll like any other
/// anchor link.
#[component]
pub fn ConfirmLink(
    href: String,
    message: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let prompt = message.clone();
    let target = href.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            "data-confirm": "{message}",
            onclick: move |evt: Event<MouseData>| {
                if !viewport::confirm(&prompt) {
                    evt.prevent_default();
                } else if let Some(fragment) = viewport::anchor_fragment(&target) {
                    evt.prevent_default();
                    viewport::scroll_to_anchor(fragment);
                }
            },
            {children}
        }
    }
}
