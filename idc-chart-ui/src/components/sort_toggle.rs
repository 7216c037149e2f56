//! The external sort control.

use crate::js_bridge;
use crate::state::{start_animation, AppState};
use dioxus::prelude::*;
use idc_data::SortMode;

/// Button flipping the sort direction; its label names the next action.
#[component]
pub fn SortToggle(id: String) -> Element {
    let mut state = use_context::<AppState>();
    let (label, ready) = match state.page.read().controller() {
        Some(controller) => (controller.sort_button_label(), true),
        None => (SortMode::default().toggle_label(), false),
    };

    let on_click = move |_: MouseEvent| {
        let now = js_bridge::now_ms();
        if state.with_controller(|c| c.toggle_sort(now)).is_some() {
            start_animation(state);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            button {
                id: "{id}",
                disabled: !ready,
                style: "padding: 6px 14px; font-weight: bold; cursor: pointer;",
                onclick: on_click,
                "{label}"
            }
        }
    }
}
