//! Industry Distribution Chart
//!
//! Counts startups per industry and draws them as a sortable bar chart.
//! Hovering a bar shows its count, clicking selects it (clicking again
//! clears the selection), and the sort button flips between high → low and
//! low → high with an animated reorder. Colors stay with their industry.
//!
//! Data flow:
//! 1. The chart configuration is read from an optional
//!    `<script id="chart-config" type="application/json">` element.
//! 2. On mount, the CSV at `data_url` is fetched once.
//! 3. `ChartPage::load` aggregates it into the controller, or settles on
//!    the placeholder message if the fetch or parse failed.
//! 4. Bar events and the sort button call the controller; the frame loop
//!    in `idc_chart_ui::state` advances transitions until they settle.

use dioxus::prelude::*;
use idc_chart::{ChartConfig, ChartPage};
use idc_chart_ui::components::{BarChart, ChartContainer, ChartTooltip, SortToggle};
use idc_chart_ui::js_bridge;
use idc_chart_ui::state::AppState;

/// Element hosting the chart's SVG surface.
const CHART_ID: &str = "chart-container";
/// The sort control.
const SORT_BUTTON_ID: &str = "sort-button";
/// Optional JSON element overriding `ChartConfig` defaults.
const CONFIG_ELEMENT_ID: &str = "chart-config";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("industry-distribution-root"))
        .launch(App);
}

/// Configuration from the page, falling back to defaults if absent or invalid.
fn load_config() -> ChartConfig {
    let Some(json) = js_bridge::element_text(CONFIG_ELEMENT_ID) else {
        return ChartConfig::default();
    };
    match ChartConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring invalid chart config: {:#}", e);
            ChartConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(load_config()));

    // Fetch once; a failure is terminal and never retried
    use_future(move || async move {
        let config = state.config.peek().clone();
        log::info!("Loading {}", config.data_url);
        let fetched = js_bridge::fetch_text(&config.data_url).await;
        state.page.set(ChartPage::load(config, fetched));
    });

    let (width, height) = {
        let config = state.config.read();
        (config.width, config.height)
    };
    let loading = state.page.read().is_loading();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            SortToggle { id: SORT_BUTTON_ID.to_string() }

            ChartContainer {
                id: CHART_ID.to_string(),
                width,
                height,
                loading,
                BarChart {}
            }

            ChartTooltip {}
        }
    }
}
