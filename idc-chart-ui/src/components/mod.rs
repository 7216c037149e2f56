//! Reusable Dioxus RSX components for the chart app.

mod axes;
mod bar_chart;
mod bars;
mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod sort_toggle;
mod tooltip;

pub use axes::{CategoryAxis, ValueAxis};
pub use bar_chart::BarChart;
pub use bars::{Bar, Bars};
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use sort_toggle::SortToggle;
pub use tooltip::ChartTooltip;

/// CSS timing function matching cubic ease-in-out.
pub(crate) const EASE_CUBIC_IN_OUT: &str = "cubic-bezier(0.645, 0.045, 0.355, 1)";
