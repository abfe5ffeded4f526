//! Layout constants, pure scroll/breakpoint logic and window glue.
//!
//! The pure functions carry the actual decisions (what counts as desktop,
//! when the back-to-top control shows, where an anchor scroll lands) so the
//! host test suite can exercise them; the web glue below only moves values
//! in and out of `web_sys` and no-ops off wasm32.

pub use dash_store::DESKTOP_BREAKPOINT;

/// Vertical scroll offset (CSS pixels) past which the back-to-top control
/// becomes visible.
pub const SCROLL_THRESHOLD: f64 = 300.0;

/// Height of the fixed header, subtracted from anchor scroll targets.
pub const HEADER_OFFSET: f64 = 70.0;

/// Delay before alert banners dismiss themselves.
pub const ALERT_DISMISS_MS: u32 = 5000;

/// Interval between notification badge refreshes.
pub const BADGE_REFRESH_MS: u32 = 30_000;

pub fn is_desktop(width: u32) -> bool {
    width >= DESKTOP_BREAKPOINT
}

/// Whether resizing to `width` should force-close the mobile sidebar
/// overlay. Crossing up into the desktop range closes it; the collapsed
/// flag is a separate concern and is never touched by resize.
pub fn force_close_on_resize(width: u32, sidebar_open: bool) -> bool {
    is_desktop(width) && sidebar_open
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Fragment id of an in-page anchor href (`"#charts"` -> `"charts"`).
/// Bare `"#"` and non-fragment hrefs yield `None`.
pub fn anchor_fragment(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(fragment) => Some(fragment),
    }
}

/// Absolute scroll position for an anchor target.
///
/// `rect_top` is the target's position relative to the viewport (bounding
/// rect), `scroll_y` the current scroll offset. The fixed header offset is
/// subtracted and the result clamped at the document origin.
pub fn anchor_scroll_target(rect_top: f64, scroll_y: f64) -> f64 {
    (rect_top + scroll_y - HEADER_OFFSET).max(0.0)
}

/// Current viewport width in CSS pixels, 0 outside a browser.
pub fn viewport_width() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map(|w| w as u32)
            .unwrap_or(0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

/// Current viewport height in CSS pixels, 0 outside a browser.
pub fn viewport_height() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Viewport-relative top of the element with the given id, `None` when the
/// element is absent or there is no document.
pub fn element_top(id: &str) -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .map(|el| el.get_bounding_client_rect().top())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Smooth-scroll the window to a vertical offset.
pub fn scroll_to(y: f64) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(y);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = y;
    }
}

pub fn scroll_to_top() {
    scroll_to(0.0);
}

/// Smooth-scroll to the element with id `fragment`, offset by the fixed
/// header height. Silently does nothing when no such element exists.
pub fn scroll_to_anchor(fragment: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let target = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(fragment));
        if let Some(el) = target {
            let rect_top = el.get_bounding_client_rect().top();
            scroll_to(anchor_scroll_target(rect_top, scroll_y()));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = fragment;
    }
}

/// Lock or unlock page scrolling while the mobile sidebar overlay is open.
pub fn set_body_scroll_lock(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let style = body.style();
            if locked {
                let _ = style.set_property("overflow", "hidden");
            } else {
                let _ = style.remove_property("overflow");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locked;
    }
}

/// Move keyboard focus to the element with the given id, if present.
pub fn focus_element(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(el) = el {
            let _ = el.focus();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

/// Blocking confirmation prompt. Returns `false` outside a browser, so a
/// destructive action is never accepted by accident.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        false
    }
}

/// Attach a page-lifetime listener for a window event (`"scroll"`,
/// `"resize"`). The closure is intentionally leaked: these listeners live as
/// long as the page.
pub fn on_window_event(kind: &str, handler: impl FnMut() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
            let _ = window
                .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (kind, handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_boundary_is_992() {
        assert!(!is_desktop(991));
        assert!(is_desktop(992));
        assert!(is_desktop(1920));
    }

    #[test]
    fn resize_force_closes_only_open_desktop_sidebars() {
        assert!(
            force_close_on_resize(992, true),
            "crossing into the desktop range closes the mobile overlay"
        );
        assert!(!force_close_on_resize(991, true), "still mobile, stays open");
        assert!(!force_close_on_resize(992, false), "nothing to close");
    }

    #[test]
    fn anchor_fragment_extracts_in_page_targets() {
        assert_eq!(anchor_fragment("#charts"), Some("charts"));
        assert_eq!(anchor_fragment("#"), None, "bare hash is not a target");
        assert_eq!(anchor_fragment("/settings"), None);
        assert_eq!(anchor_fragment(""), None);
    }

    #[test]
    fn back_to_top_shows_past_threshold() {
        assert!(
            back_to_top_visible(301.0),
            "just past the threshold should show the control"
        );
        assert!(!back_to_top_visible(300.0), "threshold itself is hidden");
        assert!(!back_to_top_visible(0.0));
    }

    #[test]
    fn anchor_target_subtracts_header_offset() {
        // Element 500px below the viewport top while scrolled 100px down.
        assert_eq!(anchor_scroll_target(500.0, 100.0), 530.0);
    }

    #[test]
    fn anchor_target_clamps_at_origin() {
        assert_eq!(
            anchor_scroll_target(10.0, 0.0),
            0.0,
            "targets above the header offset clamp to the top"
        );
    }
}
