//! Card wrapping one chart canvas.

use dioxus::prelude::*;

use crate::js_bridge;

/// Card that renders a Chart.js chart into its canvas on mount and destroys
/// the chart instance when the card unmounts.
#[component]
pub fn ChartCard(title: String, canvas_id: String, config_json: String) -> Element {
    use_effect({
        let canvas_id = canvas_id.clone();
        let config_json = config_json.clone();
        move || js_bridge::render_chart(&canvas_id, &config_json)
    });
    use_drop({
        let canvas_id = canvas_id.clone();
        move || js_bridge::destroy_chart(&canvas_id)
    });

    rsx! {
        div {
            class: "chart-card",
            h6 { class: "chart-title", "{title}" }
            canvas { id: "{canvas_id}" }
        }
    }
}
