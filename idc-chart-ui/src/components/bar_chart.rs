//! The plot group: header, axes and bars, or the load-failure placeholder.

use super::{Bars, CategoryAxis, ChartHeader, ErrorDisplay, ValueAxis};
use crate::state::AppState;
use dioxus::prelude::*;

/// Everything drawn inside the margins of the SVG surface.
#[component]
pub fn BarChart() -> Element {
    let state = use_context::<AppState>();
    let config = state.config.read().clone();
    let inner_width = config.inner_width();
    let inner_height = config.inner_height();
    let translate = format!("translate({},{})", config.margin.left, config.margin.top);

    let page = state.page.read();
    let placeholder = page.placeholder().map(str::to_string);
    let axes = page.controller().map(|c| c.axes().clone());

    rsx! {
        g {
            transform: "{translate}",
            if let Some(message) = placeholder {
                ErrorDisplay {
                    message,
                    x: inner_width / 2.0,
                    y: inner_height / 2.0,
                }
            }
            if let Some(axes) = axes {
                ChartHeader {
                    title: config.title.clone(),
                    y_axis_label: config.y_axis_label.clone(),
                    inner_width,
                    inner_height,
                }
                CategoryAxis {
                    axes: axes.clone(),
                    inner_width,
                    inner_height,
                    label_rotation: config.x_label_rotation,
                }
                ValueAxis { axes, inner_height }
                Bars {}
            }
        }
    }
}
