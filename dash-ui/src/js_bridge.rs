//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js and Bootstrap are loaded from the host page as plain globals
//! (no ES modules). This module provides safe Rust wrappers that hand
//! serialized configuration to those globals, polling until the library and
//! the target DOM node exist before touching either.

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('dash JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Construct a Chart.js chart on the canvas with id `canvas_id`.
///
/// Polls until the `Chart` global and the canvas element exist. Any chart
/// previously constructed on the same canvas is destroyed first; instances
/// are tracked on `window.__dashCharts` so re-renders do not leak.
pub fn render_chart(canvas_id: &str, config_json: &str) {
    let escaped_config = config_json.replace('\\', "\\\\").replace('\'', "\\'");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof Chart !== 'undefined' && document.getElementById('{canvas_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.__dashCharts = window.__dashCharts || {{}};
                        if (window.__dashCharts['{canvas_id}']) {{
                            window.__dashCharts['{canvas_id}'].destroy();
                        }}
                        var ctx = document.getElementById('{canvas_id}').getContext('2d');
                        window.__dashCharts['{canvas_id}'] = new Chart(ctx, JSON.parse('{escaped_config}'));
                    }} catch(e) {{ console.error('[dash] chart render error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart on `canvas_id`, if one was constructed.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&format!(
        r#"
        if (window.__dashCharts && window.__dashCharts['{canvas_id}']) {{
            window.__dashCharts['{canvas_id}'].destroy();
            delete window.__dashCharts['{canvas_id}'];
        }}
        "#,
    ));
}

/// Activate Bootstrap tooltips on every `[data-bs-toggle="tooltip"]`
/// element. One-shot scan at startup; elements added later are not picked
/// up.
pub fn init_tooltips() {
    init_bootstrap_widgets("tooltip", "Tooltip");
}

/// Activate Bootstrap popovers on every `[data-bs-toggle="popover"]`
/// element.
pub fn init_popovers() {
    init_bootstrap_widgets("popover", "Popover");
}

fn init_bootstrap_widgets(marker: &str, constructor: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof bootstrap !== 'undefined') {{
                    clearInterval(poll);
                    document.querySelectorAll('[data-bs-toggle="{marker}"]').forEach(function(el) {{
                        new bootstrap.{constructor}(el);
                    }});
                }}
            }}, 100);
        }})();
        "#,
    ));
}
