//! Auto-dismissing alert banner.

use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use crate::viewport::ALERT_DISMISS_MS;

/// Alert banner that dismisses itself after a fixed delay.
///
/// Every alert fades out after [`ALERT_DISMISS_MS`]; there is no per-alert
/// opt-out. The timeout is owned by the component and cancelled on drop, so
/// an alert removed early never fires a stale callback.
#[component]
pub fn Alert(kind: String, message: String) -> Element {
    let visible = use_signal(|| true);

    let _timer = use_hook(|| {
        Rc::new(Timeout::new(ALERT_DISMISS_MS, move || {
            let mut visible = visible;
            visible.set(false);
        }))
    });

    if !*visible.read() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "alert alert-{kind}",
            role: "alert",
            "{message}"
        }
    }
}
