//! Chart container component with loading state.

use super::LoadingSpinner;
use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id of the element hosting the SVG surface
    pub id: String,
    /// Outer SVG width in pixels
    pub width: f64,
    /// Outer SVG height in pixels
    pub height: f64,
    /// Whether the data is still loading
    #[props(default = false)]
    pub loading: bool,
    pub children: Element,
}

/// A container div hosting the chart's SVG surface with a loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: {}px;",
        props.height, props.width
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%);",
                    LoadingSpinner {}
                }
            }
            div {
                id: "{props.id}",
                svg {
                    width: "{props.width}",
                    height: "{props.height}",
                    {props.children}
                }
            }
        }
    }
}
