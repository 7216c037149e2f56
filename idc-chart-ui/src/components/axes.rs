//! Category (bottom) and value (left) axes.
//!
//! Tick groups are keyed by their label and positioned with a CSS transform,
//! so a re-render slides existing ticks over the render's duration.

use super::EASE_CUBIC_IN_OUT;
use dioxus::prelude::*;
use idc_chart::axis::Axes;

fn tick_style(dx: f64, dy: f64, duration_ms: f64) -> String {
    format!(
        "transform: translate({}px, {}px); transition: transform {}ms {};",
        dx, dy, duration_ms, EASE_CUBIC_IN_OUT
    )
}

/// Bottom axis with rotated category labels.
#[component]
pub fn CategoryAxis(axes: Axes, inner_width: f64, inner_height: f64, label_rotation: f64) -> Element {
    let domain = format!("M0,6V0H{}V6", inner_width);
    let axis_transform = format!("translate(0,{})", inner_height);
    let label_transform = format!("rotate({})", label_rotation);

    rsx! {
        g {
            class: "x-axis",
            transform: "{axis_transform}",
            "font-size": "10",
            path { class: "domain", d: "{domain}", stroke: "currentColor", fill: "none" }
            for tick in axes.categories.iter() {
                g {
                    key: "{tick.category}",
                    class: "tick",
                    style: tick_style(tick.x, 0.0, axes.duration_ms),
                    line { y2: "6", stroke: "currentColor" }
                    text {
                        y: "9",
                        dy: "0.71em",
                        fill: "currentColor",
                        transform: "{label_transform}",
                        "text-anchor": "end",
                        "{tick.category}"
                    }
                }
            }
        }
    }
}

/// Left axis with count ticks.
#[component]
pub fn ValueAxis(axes: Axes, inner_height: f64) -> Element {
    let domain = format!("M-6,{}H0V0H-6", inner_height);

    rsx! {
        g {
            class: "y-axis",
            "font-size": "10",
            path { class: "domain", d: "{domain}", stroke: "currentColor", fill: "none" }
            for tick in axes.values.iter() {
                g {
                    key: "{tick.label}",
                    class: "tick",
                    style: tick_style(0.0, tick.y, axes.duration_ms),
                    line { x2: "-6", stroke: "currentColor" }
                    text {
                        x: "-9",
                        dy: "0.32em",
                        fill: "currentColor",
                        "text-anchor": "end",
                        "{tick.label}"
                    }
                }
            }
        }
    }
}
