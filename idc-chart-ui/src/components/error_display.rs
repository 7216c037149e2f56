//! On-canvas placeholder for a failed load.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Center of the plot area
    pub x: f64,
    pub y: f64,
}

/// The single text drawn when the data could not be loaded.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        text {
            class: "error-text",
            x: "{props.x}",
            y: "{props.y}",
            "text-anchor": "middle",
            fill: "#C62828",
            "font-size": "16px",
            "{props.message}"
        }
    }
}
