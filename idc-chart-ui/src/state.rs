//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! All chart semantics live in the [`ChartPage`] it holds; the signals only
//! add reactivity and the animation clock.

use crate::js_bridge;
use dioxus::prelude::*;
use idc_chart::{ChartConfig, ChartController, ChartPage};

/// Shared application state for the chart app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loading, failed, or the live chart
    pub page: Signal<ChartPage>,
    /// Configuration the page was built from
    pub config: Signal<ChartConfig>,
    /// Clock value the current frame is drawn at
    pub now: Signal<f64>,
    /// Whether the frame loop is running
    pub animating: Signal<bool>,
}

impl AppState {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            page: Signal::new(ChartPage::Loading),
            config: Signal::new(config),
            now: Signal::new(0.0),
            animating: Signal::new(false),
        }
    }

    /// Run `f` on the live controller. `None` while loading or after a failed load.
    pub fn with_controller<R>(&mut self, f: impl FnOnce(&mut ChartController) -> R) -> Option<R> {
        let mut page = self.page.write();
        page.controller_mut().map(f)
    }
}

/// Advance `now` every animation frame until the bar scene settles.
///
/// Calling this while the loop already runs does nothing; the running loop
/// picks up the new transition because it reads the scene every frame.
pub fn start_animation(mut state: AppState) {
    if *state.animating.peek() {
        return;
    }
    state.animating.set(true);
    spawn(async move {
        loop {
            js_bridge::next_animation_frame().await;
            let now = js_bridge::now_ms();
            let running = state
                .with_controller(|controller| {
                    controller.settle(now);
                    controller.is_animating(now)
                })
                .unwrap_or(false);
            state.now.set(now);
            if !running {
                break;
            }
        }
        state.animating.set(false);
    });
}
