//! Floating tooltip following the pointer.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ChartTooltip() -> Element {
    let state = use_context::<AppState>();
    let page = state.page.read();
    let Some(tooltip) = page.controller().map(|c| c.tooltip().clone()) else {
        return rsx! {};
    };
    let (left, top) = tooltip.position();
    let style = format!(
        "position: absolute; left: {}px; top: {}px; opacity: {}; transition: opacity {}ms; \
         pointer-events: none; padding: 8px 12px; background: rgba(0, 0, 0, 0.85); color: #fff; \
         border-radius: 4px; font-size: 13px;",
        left,
        top,
        tooltip.opacity(),
        tooltip.fade_ms()
    );

    rsx! {
        div {
            class: "chart-tooltip",
            style: "{style}",
            if let Some(content) = tooltip.content() {
                div {
                    class: "tooltip-content",
                    strong { "{content.category}" }
                    br {}
                    span { class: "tooltip-count", "{content.count_label}" }
                }
            }
        }
    }
}
