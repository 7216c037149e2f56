//! The bar marks and their per-bar event bindings.

use crate::state::AppState;
use dioxus::prelude::*;
use idc_chart::scene::BarFrame;

/// All bars of the current frame, in scene order.
#[component]
pub fn Bars() -> Element {
    let state = use_context::<AppState>();
    let now = (state.now)();
    let page = state.page.read();
    let Some(controller) = page.controller() else {
        return rsx! {};
    };
    let frames = controller.frame(now);
    let radius = controller.config().bar_corner_radius;

    rsx! {
        g {
            class: "bars",
            for bar in frames {
                Bar { key: "{bar.category}", bar: bar.clone(), radius }
            }
        }
    }
}

/// One bar. Hover, move, leave and click are bound here, at render time.
#[component]
pub fn Bar(bar: BarFrame, radius: f64) -> Element {
    let mut state = use_context::<AppState>();

    let mut class = String::from("bar");
    if bar.selected {
        class.push_str(" selected");
    }
    if bar.hovered {
        class.push_str(" hovered");
    }
    let stroke = if bar.selected { "#2D3436" } else { "none" };
    let opacity = if bar.hovered { 0.8 } else { 1.0 };
    let g = bar.geometry;

    let hover_category = bar.category.clone();
    let leave_category = bar.category.clone();
    let click_category = bar.category.clone();

    rsx! {
        rect {
            class: "{class}",
            x: "{g.x}",
            y: "{g.y}",
            width: "{g.width}",
            height: "{g.height}",
            rx: "{radius}",
            ry: "{radius}",
            fill: "{bar.color}",
            stroke: "{stroke}",
            "stroke-width": "3",
            opacity: "{opacity}",
            style: "cursor: pointer;",
            onmouseover: move |_| {
                state.with_controller(|c| c.on_hover(&hover_category));
            },
            onmousemove: move |evt: MouseEvent| {
                let page = evt.page_coordinates();
                state.with_controller(|c| c.on_move(page.x, page.y));
            },
            onmouseout: move |_| {
                state.with_controller(|c| c.on_leave(&leave_category));
            },
            onclick: move |_| {
                state.with_controller(|c| c.on_click(&click_category));
            },
        }
    }
}
