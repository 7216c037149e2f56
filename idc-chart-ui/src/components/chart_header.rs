//! Chart title and y-axis label, drawn inside the SVG plot group.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    pub y_axis_label: String,
    /// Plot area size; the title centers on its width, the label on its height
    pub inner_width: f64,
    pub inner_height: f64,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let title_x = props.inner_width / 2.0;
    let label_x = -props.inner_height / 2.0;

    rsx! {
        text {
            class: "chart-title",
            x: "{title_x}",
            y: "-30",
            "text-anchor": "middle",
            "font-size": "20px",
            "font-weight": "bold",
            "{props.title}"
        }
        text {
            class: "axis-label",
            transform: "rotate(-90)",
            x: "{label_x}",
            y: "-60",
            "text-anchor": "middle",
            "font-size": "14px",
            "{props.y_axis_label}"
        }
    }
}
